pub struct Config {
    pub delimiter: u8,
    pub highlight_separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: b',',
            highlight_separator: '|',
        }
    }
}
