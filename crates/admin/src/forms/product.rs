//! New product form.

use marigold_client::{ImageUpload, ProductCreateInput};
use rust_decimal::Decimal;

use super::ValidationErrors;

/// Draft of a new product, as submitted from the multipart create form.
///
/// Unlike the other forms this one is assembled by hand from multipart
/// fields rather than derived from `Form`, because the images arrive as
/// file parts alongside the text fields.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Price as submitted.
    pub price: String,
    /// Top-level category.
    pub category: String,
    /// Sub-category.
    pub sub_category: String,
    /// Bestseller checkbox; present when checked.
    pub bestseller: bool,
    /// Selected sizes.
    pub sizes: Vec<String>,
}

impl ProductForm {
    /// Validate the draft and attach the uploaded images.
    ///
    /// # Errors
    ///
    /// Returns errors for a missing name or category, a non-positive or
    /// unparseable price, or no uploaded image.
    pub fn validate(
        &self,
        images: Vec<ImageUpload>,
    ) -> Result<ProductCreateInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push("Name is required");
        }

        let category = self.category.trim();
        if category.is_empty() {
            errors.push("Category is required");
        }

        let price = match self.price.trim().parse::<Decimal>() {
            Ok(price) if price > Decimal::ZERO => price,
            Ok(_) => {
                errors.push("Price must be greater than zero");
                Decimal::ZERO
            }
            Err(_) => {
                errors.push("Price must be a number");
                Decimal::ZERO
            }
        };

        if images.is_empty() {
            errors.push("At least one image is required");
        }

        let input = ProductCreateInput {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            category: category.to_string(),
            sub_category: self.sub_category.trim().to_string(),
            bestseller: self.bestseller,
            sizes: self.sizes.clone(),
            images,
        };
        errors.into_result(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ImageUpload {
        ImageUpload {
            file_name: "front.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8],
        }
    }

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Linen Overshirt".to_string(),
            description: "Relaxed fit".to_string(),
            price: "59.50".to_string(),
            category: "Men".to_string(),
            sub_category: "Topwear".to_string(),
            bestseller: true,
            sizes: vec!["S".to_string(), "M".to_string()],
        }
    }

    #[test]
    fn test_valid_form_builds_input() {
        let input = valid_form().validate(vec![image()]).expect("valid");
        assert_eq!(input.name, "Linen Overshirt");
        assert_eq!(input.sizes.len(), 2);
        assert_eq!(input.images.len(), 1);
    }

    #[test]
    fn test_missing_image_is_rejected() {
        let err = valid_form().validate(vec![]).expect_err("invalid");
        assert!(err.to_string().contains("At least one image"));
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let form = ProductForm {
            price: "0".to_string(),
            ..valid_form()
        };
        let err = form.validate(vec![image()]).expect_err("invalid");
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_multiple_errors_are_collected() {
        let form = ProductForm {
            name: String::new(),
            category: String::new(),
            price: "abc".to_string(),
            ..ProductForm::default()
        };
        let err = form.validate(vec![]).expect_err("invalid");
        let message = err.to_string();
        assert!(message.contains("Name is required"));
        assert!(message.contains("Category is required"));
        assert!(message.contains("Price must be a number"));
        assert!(message.contains("At least one image"));
    }
}
