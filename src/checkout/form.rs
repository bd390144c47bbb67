//! Checkout form
//!
//! One named field per input, with a typed setter per field instead of a
//! generic key-based updater. Setters apply the same keystroke filters the
//! storefront applies while typing; validation re-checks everything on
//! submit, so a form built without the setters is still checked in full.

/// Buyer-submitted checkout data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    name: String,
    surname: String,
    email: String,
    street: String,
    city: String,
    postal_code: String,
    card_number: String,
    expiry_month: String,
    expiry_year: String,
    cvv: String,
}

/// Keep letters (accents included) and spaces.
fn filter_letters(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .collect()
}

/// Keep ASCII digits, up to `max` of them.
fn filter_digits(raw: &str, max: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(max)
        .collect()
}

impl CheckoutForm {
    /// Creates an empty form, as when the checkout view opens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buyer's given name, keeping letters and spaces only.
    pub fn set_name(&mut self, raw: &str) {
        self.name = filter_letters(raw);
    }

    /// Sets the buyer's surname, keeping letters and spaces only.
    pub fn set_surname(&mut self, raw: &str) {
        self.surname = filter_letters(raw);
    }

    /// Sets the contact email verbatim; the shape is checked on submit.
    pub fn set_email(&mut self, raw: &str) {
        self.email = raw.to_string();
    }

    /// Sets the shipping street, free text.
    pub fn set_street(&mut self, raw: &str) {
        self.street = raw.to_string();
    }

    /// Sets the shipping city, free text.
    pub fn set_city(&mut self, raw: &str) {
        self.city = raw.to_string();
    }

    /// Sets the postal code, keeping at most five digits.
    pub fn set_postal_code(&mut self, raw: &str) {
        self.postal_code = filter_digits(raw, 5);
    }

    /// Sets the card number, keeping digits and the spaces used to group
    /// them. Digits beyond the sixteenth are dropped.
    pub fn set_card_number(&mut self, raw: &str) {
        let mut digits = 0usize;

        self.card_number = raw
            .chars()
            .filter(|c| {
                if c.is_ascii_digit() {
                    digits += 1;
                    digits <= 16
                } else {
                    *c == ' '
                }
            })
            .collect();
    }

    /// Sets the card expiry month, keeping at most two digits.
    pub fn set_expiry_month(&mut self, raw: &str) {
        self.expiry_month = filter_digits(raw, 2);
    }

    /// Sets the card expiry year, keeping at most four digits.
    pub fn set_expiry_year(&mut self, raw: &str) {
        self.expiry_year = filter_digits(raw, 4);
    }

    /// Sets the card verification value, keeping at most four digits.
    pub fn set_cvv(&mut self, raw: &str) {
        self.cvv = filter_digits(raw, 4);
    }

    /// The buyer's given name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The buyer's surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// The contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The shipping street.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// The shipping city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// The postal code.
    #[must_use]
    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// The card number as typed, spaces included.
    #[must_use]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The card expiry month digits.
    #[must_use]
    pub fn expiry_month(&self) -> &str {
        &self.expiry_month
    }

    /// The card expiry year digits.
    #[must_use]
    pub fn expiry_year(&self) -> &str {
        &self.expiry_year
    }

    /// The card verification value digits.
    #[must_use]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_filter_keeps_accents_and_spaces() {
        let mut form = CheckoutForm::new();

        form.set_name("María José 3!");

        assert_eq!(form.name(), "María José ");
    }

    #[test]
    fn name_filter_drops_digits_and_punctuation() {
        let mut form = CheckoutForm::new();

        form.set_surname("O'Brien-42");

        assert_eq!(form.surname(), "OBrien");
    }

    #[test]
    fn postal_code_truncates_to_five_digits() {
        let mut form = CheckoutForm::new();

        form.set_postal_code("CP 1234567");

        assert_eq!(form.postal_code(), "12345");
    }

    #[test]
    fn card_number_keeps_grouping_spaces() {
        let mut form = CheckoutForm::new();

        form.set_card_number("1234 5678 9012 3456");

        assert_eq!(form.card_number(), "1234 5678 9012 3456");
    }

    #[test]
    fn card_number_drops_digits_past_sixteen() {
        let mut form = CheckoutForm::new();

        form.set_card_number("12345678901234567890");

        assert_eq!(form.card_number(), "1234567890123456");
    }

    #[test]
    fn expiry_and_cvv_keep_digits_only() {
        let mut form = CheckoutForm::new();

        form.set_expiry_month("12/");
        form.set_expiry_year("2031x");
        form.set_cvv("12a34");

        assert_eq!(form.expiry_month(), "12");
        assert_eq!(form.expiry_year(), "2031");
        assert_eq!(form.cvv(), "1234");
    }

    #[test]
    fn free_text_fields_are_stored_verbatim() {
        let mut form = CheckoutForm::new();

        form.set_street("Av. Central 123, 4B");
        form.set_city("Ciudad de México");
        form.set_email(" user@example.com ");

        assert_eq!(form.street(), "Av. Central 123, 4B");
        assert_eq!(form.city(), "Ciudad de México");
        assert_eq!(form.email(), " user@example.com ");
    }
}
