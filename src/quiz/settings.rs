#[derive(Clone, Copy, Debug)]
pub struct Settings {
    pub option_count: usize,
    pub default_question_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            option_count: 4,
            default_question_count: 10,
        }
    }
}
