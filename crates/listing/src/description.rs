/// Body text used when the seller left the details empty.
pub const FALLBACK_BODY: &str = "High-quality product carefully selected for you";

const FALLBACK_SUBJECT: &str = "product";

/// Render the fixed listing description around the name and details.
///
/// `details` is inserted verbatim; the name appears lower-cased in the
/// opening line and in the delivery paragraph.
pub fn generate_description(name: &str, details: &str) -> String {
    let body = if details.is_empty() { FALLBACK_BODY } else { details };
    let mut subject = name.to_lowercase();
    if subject.is_empty() {
        subject = FALLBACK_SUBJECT.to_string();
    }

    format!(
        "Discover our {subject} - perfect for those who value quality and authenticity.

{body}

✅ What makes it special:
• Sourced directly from local producers
• Quality guaranteed - inspected and certified
• Fresh and natural ingredients/materials
• Support rural communities with every purchase

🚚 Delivery Information:
Fast and reliable delivery available to your area. We handle each order with care to ensure you receive your {subject} in perfect condition.

💚 Why Choose Us:
We're committed to connecting rural sellers with customers who appreciate genuine, quality products. Every purchase supports local farmers and artisans.

Order now and experience the difference of authentic, locally-sourced products!"
    )
}
