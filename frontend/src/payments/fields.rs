//! Field templates for the "add payment method" form.
//!
//! Everything here is plain data: the modal component turns a
//! `Vec<FieldDescriptor>` into markup, and the set only ever depends on the
//! selected [`PaymentMethodType`] (plus the current year for card expiry).

use super::payment_models::PaymentMethodType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Leading empty-valued option shown before a choice is made
    fn placeholder(label: &str) -> Self {
        Self::new("", label)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text {
        placeholder: &'static str,
        max_length: Option<u32>,
    },
    Select {
        options: Vec<SelectOption>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Form field name, becomes the payload key
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    fn text(name: &'static str, label: &'static str, placeholder: &'static str, max_length: Option<u32>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text { placeholder, max_length },
            required: true,
        }
    }

    fn select(name: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select { options },
            required: true,
        }
    }
}

/// How many expiry years the card form offers, starting at the current one
pub const EXPIRY_YEAR_SPAN: i32 = 20;

const BANKS: [(&str, &str); 6] = [
    ("SBI", "State Bank of India"),
    ("HDFC", "HDFC Bank"),
    ("ICICI", "ICICI Bank"),
    ("AXIS", "Axis Bank"),
    ("KOTAK", "Kotak Mahindra Bank"),
    ("PNB", "Punjab National Bank"),
];

const WALLETS: [(&str, &str); 4] = [
    ("PAYTM", "Paytm"),
    ("PHONEPE", "PhonePe"),
    ("GPAY", "Google Pay"),
    ("AMAZONPAY", "Amazon Pay"),
];

pub fn month_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder("MM"))
        .chain((1..=12).map(|m| {
            let month = format!("{:02}", m);
            SelectOption::new(month.clone(), month)
        }))
        .collect()
}

pub fn year_options(current_year: i32) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder("YYYY"))
        .chain((current_year..current_year + EXPIRY_YEAR_SPAN).map(|y| {
            let year = y.to_string();
            SelectOption::new(year.clone(), year)
        }))
        .collect()
}

fn fixed_options(placeholder: &str, entries: &[(&str, &str)]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(placeholder))
        .chain(entries.iter().map(|(value, label)| SelectOption::new(*value, *label)))
        .collect()
}

/// The complete field set for a selector value. No type means no fields.
pub fn field_set(method_type: Option<PaymentMethodType>, current_year: i32) -> Vec<FieldDescriptor> {
    match method_type {
        Some(PaymentMethodType::CreditCard) | Some(PaymentMethodType::DebitCard) => vec![
            FieldDescriptor::text("card_number", "Card Number (Last 4 digits)", "1234", Some(4)),
            FieldDescriptor::text("card_name", "Cardholder Name", "Name on card", None),
            FieldDescriptor::select("expiry_month", "Expiry Month", month_options()),
            FieldDescriptor::select("expiry_year", "Expiry Year", year_options(current_year)),
        ],
        Some(PaymentMethodType::Upi) => vec![
            FieldDescriptor::text("upi_id", "UPI ID", "yourname@upi", None),
        ],
        Some(PaymentMethodType::NetBanking) => vec![
            FieldDescriptor::select("bank_name", "Bank Name", fixed_options("Select your bank", &BANKS)),
        ],
        Some(PaymentMethodType::Wallet) => vec![
            FieldDescriptor::select("wallet_provider", "Wallet Provider", fixed_options("Select wallet", &WALLETS)),
        ],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(fields: &[FieldDescriptor]) -> Vec<&'static str> {
        fields.iter().map(|f| f.name).collect()
    }

    fn select_options(field: &FieldDescriptor) -> &[SelectOption] {
        match &field.kind {
            FieldKind::Select { options } => options,
            other => panic!("{} is not a select: {:?}", field.name, other),
        }
    }

    #[test]
    fn months_are_zero_padded_after_placeholder() {
        let months = month_options();
        assert_eq!(months.len(), 13);
        assert_eq!(months[0], SelectOption::new("", "MM"));
        let labels: Vec<_> = months[1..].iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            ["01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12"]
        );
        assert!(months[1..].iter().all(|o| o.value == o.label));
    }

    #[test]
    fn years_cover_twenty_consecutive_years() {
        let years = year_options(2026);
        assert_eq!(years.len(), 21);
        assert_eq!(years[0], SelectOption::new("", "YYYY"));
        assert_eq!(years[1].value, "2026");
        assert_eq!(years[20].value, "2045");
        for (i, option) in years[1..].iter().enumerate() {
            assert_eq!(option.value, (2026 + i as i32).to_string());
            assert_eq!(option.value, option.label);
        }
    }

    #[test]
    fn card_types_share_the_card_template() {
        let credit = field_set(Some(PaymentMethodType::CreditCard), 2026);
        let debit = field_set(Some(PaymentMethodType::DebitCard), 2026);
        assert_eq!(credit, debit);
        assert_eq!(names(&credit), ["card_number", "card_name", "expiry_month", "expiry_year"]);
        assert_eq!(
            credit[0].kind,
            FieldKind::Text { placeholder: "1234", max_length: Some(4) }
        );
        assert_eq!(select_options(&credit[2]), month_options().as_slice());
        assert_eq!(select_options(&credit[3]), year_options(2026).as_slice());
        assert!(credit.iter().all(|f| f.required));
    }

    #[test]
    fn upi_has_a_single_id_field() {
        let fields = field_set(Some(PaymentMethodType::Upi), 2026);
        assert_eq!(names(&fields), ["upi_id"]);
        assert_eq!(
            fields[0].kind,
            FieldKind::Text { placeholder: "yourname@upi", max_length: None }
        );
    }

    #[test]
    fn net_banking_lists_six_banks() {
        let fields = field_set(Some(PaymentMethodType::NetBanking), 2026);
        assert_eq!(names(&fields), ["bank_name"]);
        let options = select_options(&fields[0]);
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], SelectOption::new("", "Select your bank"));
        let values: Vec<_> = options[1..].iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["SBI", "HDFC", "ICICI", "AXIS", "KOTAK", "PNB"]);
    }

    #[test]
    fn wallet_lists_four_providers() {
        let fields = field_set(Some(PaymentMethodType::Wallet), 2026);
        assert_eq!(names(&fields), ["wallet_provider"]);
        let options = select_options(&fields[0]);
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], SelectOption::new("", "Select wallet"));
        assert_eq!(options[3], SelectOption::new("GPAY", "Google Pay"));
    }

    #[test]
    fn no_type_means_no_fields() {
        assert!(field_set(None, 2026).is_empty());
        assert!(field_set(PaymentMethodType::from_selector(""), 2026).is_empty());
    }

    #[test]
    fn switching_type_replaces_the_whole_set() {
        let card = field_set(Some(PaymentMethodType::CreditCard), 2026);
        let upi = field_set(Some(PaymentMethodType::Upi), 2026);
        assert!(names(&upi).iter().all(|n| !names(&card).contains(n)));
        assert_eq!(upi.len(), 1);
    }
}
