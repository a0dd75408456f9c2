//! Built-in seed posts and the merge applied at startup.

use std::collections::HashSet;

use super::post::{Post, PostDate, PostFields, PostId, PostStatus};

/// The fixed post list every fresh installation starts with.
pub fn builtin_posts() -> Vec<Post> {
    use PostStatus::{Draft, Published};

    let rows: [(u64, &str, &str, (i32, u32, u32), PostStatus, &str); 11] = [
        (
            1,
            "Digital India: Transforming Governance Through Technology",
            "Priya Sharma",
            (2023, 10, 15),
            Published,
            "Explore how Digital India initiatives are revolutionizing public services and citizen engagement across the country...",
        ),
        (
            2,
            "The Rise of Indian Startups in Fintech",
            "Arjun Patel",
            (2023, 10, 20),
            Draft,
            "Analyze the explosive growth of Indian fintech companies and their impact on financial inclusion...",
        ),
        (
            3,
            "Sustainable Agriculture Practices in Rural India",
            "Dr. Kavitha Reddy",
            (2023, 10, 25),
            Published,
            "Discover innovative farming techniques helping Indian farmers increase productivity while preserving the environment...",
        ),
        (
            4,
            "Indian Classical Music in the Digital Age",
            "Ravi Iyer",
            (2023, 11, 1),
            Published,
            "How traditional Indian ragas and classical music are finding new audiences through digital platforms...",
        ),
        (
            5,
            "Ayurveda and Modern Healthcare: Bridging Ancient Wisdom",
            "Dr. Meera Gupta",
            (2023, 11, 5),
            Draft,
            "Examining the integration of Ayurvedic principles with contemporary medical practices in India...",
        ),
        (
            6,
            "The Indian Space Program: From Aryabhata to Chandrayaan",
            "Vikram Singh",
            (2023, 11, 10),
            Published,
            "Tracing ISRO's remarkable journey and India's growing prominence in space exploration...",
        ),
        (
            7,
            "Street Food Culture: A Culinary Journey Through India",
            "Anjali Bhatt",
            (2023, 11, 15),
            Published,
            "Celebrating the diverse flavors and cultural significance of Indian street food across different regions...",
        ),
        (
            8,
            "Renewable Energy Revolution in India",
            "Karthik Nair",
            (2023, 11, 20),
            Draft,
            "Investigating India's ambitious renewable energy targets and the technology driving this transformation...",
        ),
        (
            9,
            "Bollywood's Global Influence and Cultural Diplomacy",
            "Pooja Malhotra",
            (2023, 11, 25),
            Published,
            "Analyzing how Indian cinema has become a powerful tool for cultural exchange and soft diplomacy...",
        ),
        (
            10,
            "Traditional Handicrafts in Modern E-commerce",
            "Suresh Kumar",
            (2023, 12, 1),
            Published,
            "How Indian artisans are leveraging digital platforms to preserve and promote traditional crafts...",
        ),
        (
            11,
            "A Guide to UPI Integration in Web Apps",
            "Sneha Nair",
            (2024, 5, 21),
            Draft,
            "Learn how to integrate UPI-based payments into your web applications using IndiaStack and Razorpay APIs.",
        ),
    ];

    rows.into_iter()
        .map(|(id, title, author, (y, m, d), status, content)| {
            Post::new(
                PostId(id),
                PostDate::ymd(y, m, d),
                PostFields::new(title, author, content, status),
            )
        })
        .collect()
}

/// Merge persisted posts with the built-in set, keyed by id.
///
/// Persisted posts come first and win any id conflict. Built-in posts whose
/// id is absent from `persisted` are appended. A duplicate id inside
/// `persisted` keeps only its first occurrence.
pub fn merge_seed(persisted: Vec<Post>, builtin: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::with_capacity(persisted.len() + builtin.len());
    let mut merged = Vec::with_capacity(persisted.len() + builtin.len());

    for post in persisted.into_iter().chain(builtin) {
        if seen.insert(post.id) {
            merged.push(post);
        }
    }

    merged
}
