use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentMethodType {
    CreditCard,
    DebitCard,
    Upi,
    NetBanking,
    Wallet,
}

impl PaymentMethodType {
    pub const ALL: [PaymentMethodType; 5] = [
        PaymentMethodType::CreditCard,
        PaymentMethodType::DebitCard,
        PaymentMethodType::Upi,
        PaymentMethodType::NetBanking,
        PaymentMethodType::Wallet,
    ];

    /// Wire value, also used as the `<option>` value of the type selector
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::CreditCard => "CREDIT_CARD",
            PaymentMethodType::DebitCard => "DEBIT_CARD",
            PaymentMethodType::Upi => "UPI",
            PaymentMethodType::NetBanking => "NET_BANKING",
            PaymentMethodType::Wallet => "WALLET",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethodType::CreditCard => "Credit Card",
            PaymentMethodType::DebitCard => "Debit Card",
            PaymentMethodType::Upi => "UPI",
            PaymentMethodType::NetBanking => "Net Banking",
            PaymentMethodType::Wallet => "Digital Wallet",
        }
    }

    /// Selector value to type. Blank or unknown values select nothing.
    pub fn from_selector(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPaymentMethodType(pub String);

impl FromStr for PaymentMethodType {
    type Err = UnknownPaymentMethodType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethodType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPaymentMethodType(s.to_string()))
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct MethodIdRequest {
    pub method_id: String,
}
