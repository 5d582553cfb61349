use constants::page::FOOTER_YEAR_ID;
use web_sys::Document;

use super::{DomError, PageController};
use crate::ui::footer_year::current_year;

pub struct FooterYearController;

impl PageController for FooterYearController {
    fn name(&self) -> &'static str {
        "footer year"
    }

    fn attach(&mut self, document: &Document) -> Result<(), DomError> {
        let element = document
            .get_element_by_id(FOOTER_YEAR_ID)
            .ok_or(DomError::Missing("#year"))?;
        element.set_text_content(Some(&current_year().to_string()));
        Ok(())
    }

    fn detach(&mut self) {}
}
