//! Seed data loaded once at store construction. These records are the whole
//! content catalog until a persistent backend replaces `MemStore`.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::blog::BlogPost;
use crate::models::product::Product;
use crate::models::quiz::{QuizOption, QuizQuestion};

fn opt(value: &str, label: &str, description: &str) -> QuizOption {
    QuizOption {
        value: value.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
        icon: None,
    }
}

fn opt_icon(value: &str, label: &str, description: &str, icon: &str) -> QuizOption {
    QuizOption {
        icon: Some(icon.to_string()),
        ..opt(value, label, description)
    }
}

fn published(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed publish date")
}

pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1".to_string(),
            question: "What's your primary health concern right now?".to_string(),
            options: vec![
                opt_icon(
                    "hormonal",
                    "Hormonal Imbalance",
                    "Hot flashes, mood swings, irregular periods, perimenopause symptoms",
                    "fas fa-venus",
                ),
                opt_icon(
                    "sleep",
                    "Sleep Issues",
                    "Insomnia, restless sleep, cortisol spikes, trouble falling asleep",
                    "fas fa-moon",
                ),
                opt_icon(
                    "energy",
                    "Low Energy & Fatigue",
                    "Afternoon crashes, brain fog, lack of motivation, adrenal fatigue",
                    "fas fa-bolt",
                ),
                opt_icon(
                    "overwhelm",
                    "Supplement Overwhelm",
                    "Too many pills, unsure what's working, conflicting advice",
                    "fas fa-pills",
                ),
            ],
            category: "primary_concern".to_string(),
            order: 1,
        },
        QuizQuestion {
            id: "q2".to_string(),
            question: "How would you describe your current energy levels?".to_string(),
            options: vec![
                opt("very_low", "Very Low", "Struggling to get through the day"),
                opt("low", "Low", "Tired most of the time"),
                opt("moderate", "Moderate", "Some good days, some bad days"),
                opt("good", "Good", "Generally energetic with occasional dips"),
            ],
            category: "energy".to_string(),
            order: 2,
        },
        QuizQuestion {
            id: "q3".to_string(),
            question: "How is your sleep quality?".to_string(),
            options: vec![
                opt("poor", "Poor", "Difficulty falling or staying asleep"),
                opt("fair", "Fair", "Some restless nights"),
                opt("good", "Good", "Generally sleep well"),
                opt("excellent", "Excellent", "Deep, restorative sleep"),
            ],
            category: "sleep".to_string(),
            order: 3,
        },
        QuizQuestion {
            id: "q4".to_string(),
            question: "Are you currently experiencing any hormonal symptoms?".to_string(),
            options: vec![
                opt("many", "Many symptoms", "Hot flashes, mood swings, irregular periods"),
                opt("some", "Some symptoms", "Occasional hormonal fluctuations"),
                opt("few", "Few symptoms", "Minor changes"),
                opt("none", "No symptoms", "Feeling balanced"),
            ],
            category: "hormonal".to_string(),
            order: 4,
        },
        QuizQuestion {
            id: "q5".to_string(),
            question: "How many supplements are you currently taking?".to_string(),
            options: vec![
                opt("none", "None", "Not taking any supplements"),
                opt("few", "1-3", "Just the basics"),
                opt("moderate", "4-8", "A moderate stack"),
                opt("many", "9+", "Taking many supplements"),
            ],
            category: "current_stack".to_string(),
            order: 5,
        },
    ]
}

pub fn products() -> Vec<Product> {
    let image_url =
        "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=300";

    vec![
        Product {
            id: "p1".to_string(),
            name: "Vitex (Chasteberry)".to_string(),
            brand: "Nature's Way".to_string(),
            category: "hormones".to_string(),
            description: "Supports hormone regulation and menstrual cycle balance".to_string(),
            benefits: vec![
                "Hormone regulation support".to_string(),
                "Third-party tested".to_string(),
                "Non-GMO, vegan".to_string(),
            ],
            price: "$24.99".to_string(),
            affiliate_url: "https://affiliate.link/vitex".to_string(),
            rating: "4.8".to_string(),
            review_count: 1249,
            image_url: Some(image_url.to_string()),
            featured: true,
        },
        Product {
            id: "p2".to_string(),
            name: "Magnesium Glycinate".to_string(),
            brand: "Thorne".to_string(),
            category: "sleep".to_string(),
            description: "Highly absorbable magnesium for better sleep and relaxation".to_string(),
            benefits: vec![
                "Better sleep & relaxation".to_string(),
                "Highly absorbable form".to_string(),
                "NSF certified".to_string(),
            ],
            price: "$31.99".to_string(),
            affiliate_url: "https://affiliate.link/magnesium".to_string(),
            rating: "4.9".to_string(),
            review_count: 2103,
            image_url: Some(image_url.to_string()),
            featured: true,
        },
        Product {
            id: "p3".to_string(),
            name: "Omega-3 (DHA/EPA)".to_string(),
            brand: "Nordic Naturals".to_string(),
            category: "basics".to_string(),
            description: "High-quality fish oil for brain and heart health".to_string(),
            benefits: vec![
                "Brain & heart health".to_string(),
                "Molecularly distilled".to_string(),
                "No fishy aftertaste".to_string(),
            ],
            price: "$42.95".to_string(),
            affiliate_url: "https://affiliate.link/omega3".to_string(),
            rating: "4.7".to_string(),
            review_count: 856,
            image_url: Some(image_url.to_string()),
            featured: false,
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "b1".to_string(),
            title: "The Complete Guide to Perimenopause Supplements: What Actually Works"
                .to_string(),
            excerpt: "Navigate the confusing world of perimenopause with our comprehensive, \
                      science-backed guide to supplements that can actually help with hot \
                      flashes, mood swings, and sleep issues."
                .to_string(),
            content: "Full article content would go here...".to_string(),
            category: "hormones".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1550572017-edd951aa8f41?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                    .to_string(),
            ),
            read_time: 12,
            author: "Dr. Sarah Chen".to_string(),
            featured: true,
            published_at: published(2024, 12, 15),
            slug: "perimenopause-supplements-guide".to_string(),
        },
        BlogPost {
            id: "b2".to_string(),
            title: "5 Natural Sleep Aids That Actually Work (No Melatonin Required)".to_string(),
            excerpt: "Discover science-backed alternatives to melatonin that can help you fall \
                      asleep faster and stay asleep longer."
                .to_string(),
            content: "Full article content would go here...".to_string(),
            category: "sleep".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1541781774459-bb2af2f05b55?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                    .to_string(),
            ),
            read_time: 8,
            author: "Dr. Sarah Chen".to_string(),
            featured: false,
            published_at: published(2024, 12, 12),
            slug: "natural-sleep-aids-guide".to_string(),
        },
        BlogPost {
            id: "b3".to_string(),
            title: "How to Read Supplement Labels Like a Pro (Avoid These Red Flags)".to_string(),
            excerpt: "Learn the insider secrets to identifying high-quality supplements and \
                      avoiding marketing gimmicks."
                .to_string(),
            content: "Full article content would go here...".to_string(),
            category: "quality".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=400"
                    .to_string(),
            ),
            read_time: 6,
            author: "Dr. Sarah Chen".to_string(),
            featured: false,
            published_at: published(2024, 12, 10),
            slug: "reading-supplement-labels".to_string(),
        },
    ]
}
