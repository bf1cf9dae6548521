//! Registration form driven one prompt at a time

use shared::models::ProductRegistration;

use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Brand,
    Price,
    Category,
    Description,
    ImageUrl,
}

impl Field {
    pub const ORDER: [Field; 6] = [
        Field::Name,
        Field::Brand,
        Field::Price,
        Field::Category,
        Field::Description,
        Field::ImageUrl,
    ];

    pub fn prompt(self) -> &'static str {
        match self {
            Field::Name => "Name*",
            Field::Brand => "Brand*",
            Field::Price => "Price*",
            Field::Category => "Category (graos, laticinios, biscoitos, bebidas, outros)",
            Field::Description => "Description (optional)",
            Field::ImageUrl => "Image URL (optional)",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, Field::Name | Field::Brand | Field::Price)
    }

    fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Brand => "brand",
            Field::Price => "price",
            Field::Category => "category",
            Field::Description => "description",
            Field::ImageUrl => "imageUrl",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    barcode: String,
    data: ProductRegistration,
    step: usize,
}

impl RegistrationForm {
    pub fn new(barcode: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            data: ProductRegistration::default(),
            step: 0,
        }
    }

    /// Field waiting for an answer, `None` once every field is filled
    pub fn current(&self) -> Option<Field> {
        Field::ORDER.get(self.step).copied()
    }

    /// Record `value` for the current field and move on.
    ///
    /// A blank answer to a required field is rejected and the field is
    /// asked again.
    pub fn answer(&mut self, value: &str) -> AppResult<()> {
        let Some(field) = self.current() else {
            return Ok(());
        };
        let value = value.trim();
        if field.required() && value.is_empty() {
            return Err(AppError::missing_fields(&[field.key()]));
        }

        let value = value.to_string();
        match field {
            Field::Name => self.data.name = value,
            Field::Brand => self.data.brand = value,
            Field::Price => self.data.price = value,
            Field::Category => self.data.category = value,
            Field::Description => self.data.description = Some(value),
            Field::ImageUrl => self.data.image_url = Some(value),
        }
        self.step += 1;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.current().is_none()
    }

    pub fn into_parts(self) -> (String, ProductRegistration) {
        (self.barcode, self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_fill_in_order() {
        let mut form = RegistrationForm::new("0000000000000");
        for answer in ["Tapioca", "Lisa", "45.90", "grãos", "", ""] {
            assert!(!form.is_complete());
            form.answer(answer).unwrap();
        }
        assert!(form.is_complete());

        let (barcode, data) = form.into_parts();
        assert_eq!(barcode, "0000000000000");
        assert_eq!(data.name, "Tapioca");
        assert_eq!(data.price, "45.90");
        assert_eq!(data.category, "grãos");
        assert_eq!(data.description.as_deref(), Some(""));
    }

    #[test]
    fn test_blank_required_field_is_asked_again() {
        let mut form = RegistrationForm::new("1");
        let err = form.answer("   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(form.current(), Some(Field::Name));

        form.answer("Sal").unwrap();
        assert_eq!(form.current(), Some(Field::Brand));
    }

    #[test]
    fn test_optional_fields_accept_blank() {
        let mut form = RegistrationForm::new("1");
        for answer in ["A", "B", "1"] {
            form.answer(answer).unwrap();
        }
        assert!(form.answer("").is_ok());
        assert_eq!(form.current(), Some(Field::Description));
    }
}
