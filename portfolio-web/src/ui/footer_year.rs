use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
