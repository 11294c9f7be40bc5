//! Human labels for breakdown keys and payment channels

/// key → label; keys are matched case-insensitively
const LABELS: &[(&str, &str)] = &[
    // Order types
    ("dine-in", "Dine In"),
    ("dine_in", "Dine In"),
    ("dinein", "Dine In"),
    ("takeaway", "Takeaway"),
    ("take-away", "Takeaway"),
    ("delivery", "Delivery"),
    ("pickup", "Pickup"),
    // Delivery providers
    ("foodpanda", "Foodpanda"),
    ("pathao", "Pathao Food"),
    ("pathao_food", "Pathao Food"),
    ("shohoz", "Shohoz Food"),
    ("own", "Own Delivery"),
    // Payment channels
    ("cash", "Cash"),
    ("card", "Card"),
    ("mobile", "Mobile Banking"),
    ("bank", "Bank Transfer"),
];

/// Label for a breakdown key; unknown keys fall back to the raw key with
/// `_` and `-` replaced by spaces
pub fn label_for(key: &str) -> String {
    let trimmed = key.trim();
    LABELS
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(trimmed))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| trimmed.replace(['_', '-'], " "))
}
