// src/api/dto/customer_dto.rs
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{Address, Customer};
use crate::utils::validation::common::{self, address, customer};

// --- Request DTOs ---

/// 顧客の作成・更新リクエスト（更新も全項目を送る）
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(
        length(
            min = customer::NAME_MIN_LENGTH,
            max = customer::NAME_MAX_LENGTH,
            message = "Name must be between 1 and 255 characters"
        ),
        custom(function = common::validate_not_empty_or_whitespace)
    )]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(
        max = customer::PHONE_MAX_LENGTH,
        message = "Phone must not exceed 20 characters"
    ))]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub address: Option<AddressDto>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[validate(length(max = address::LINE_MAX_LENGTH, message = "Line 1 must not exceed 255 characters"))]
    pub line1: Option<String>,
    #[validate(length(max = address::LINE_MAX_LENGTH, message = "Line 2 must not exceed 255 characters"))]
    pub line2: Option<String>,
    #[validate(length(max = address::CITY_MAX_LENGTH, message = "City must not exceed 100 characters"))]
    pub city: Option<String>,
    #[validate(length(max = address::STATE_MAX_LENGTH, message = "State must not exceed 100 characters"))]
    pub state: Option<String>,
    #[validate(length(
        max = address::POSTAL_CODE_MAX_LENGTH,
        message = "Postal code must not exceed 20 characters"
    ))]
    pub postal_code: Option<String>,
    #[validate(length(max = address::COUNTRY_MAX_LENGTH, message = "Country must not exceed 100 characters"))]
    pub country: Option<String>,
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            line1: address.line1,
            line2: address.line2,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
        }
    }
}

// 編集フォームの初期値
impl From<&Customer> for CreateCustomerRequest {
    fn from(customer: &Customer) -> Self {
        Self {
            email: customer.email.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone().map(AddressDto::from),
        }
    }
}
