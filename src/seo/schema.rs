//! JSON-LD structured data embedded in every page.

use crate::pages::html::script_json;
use crate::seo::{LOGO_URL, SITE_NAME};
use serde_json::{json, Value};

const FAQ: &[(&str, &str)] = &[
    (
        "What is the Digital SAT?",
        "The Digital SAT is the new format of the SAT exam that is taken on a computer or tablet. It features adaptive testing, shorter testing time, and built-in tools like a calculator for all math questions.",
    ),
    (
        "How long is the Digital SAT Crash Course?",
        "Our comprehensive Digital SAT Crash Course is designed to be completed in 8 weeks, with personalized pacing options available based on your test date and preparation needs.",
    ),
    (
        "Do you offer personalized tutoring?",
        "Yes, we offer personalized one-on-one tutoring with our expert SAT instructors who can focus on your specific needs and areas for improvement.",
    ),
];

pub fn organization(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "EducationalOrganization",
        "name": SITE_NAME,
        "url": base_url,
        "logo": LOGO_URL,
        "sameAs": [
            "https://www.facebook.com/thesatcrashcourse",
            "https://www.instagram.com/thesatcrashcourse",
            "https://twitter.com/satcrashcourse"
        ],
        "description": "Top quality Digital SAT practice tests and prep courses to help students achieve their dream scores.",
        "email": "contact@thesatcrashcourse.com",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Los Angeles",
            "addressRegion": "CA",
            "addressCountry": "US"
        }
    })
}

pub fn course(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Course",
        "name": "Digital SAT Crash Course",
        "description": "Comprehensive preparation for the Digital SAT exam with practice tests, personalized learning, and expert guidance.",
        "provider": {
            "@type": "Organization",
            "name": SITE_NAME,
            "sameAs": base_url
        },
        "timeRequired": "P8W"
    })
}

pub fn faq() -> Value {
    let questions: Vec<Value> = FAQ
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions
    })
}

/// `<script type="application/ld+json">` blocks for the head.
pub fn render_scripts(base_url: &str) -> String {
    [organization(base_url), course(base_url), faq()]
        .iter()
        .map(|document| {
            format!(
                r#"<script type="application/ld+json">{}</script>"#,
                script_json(&document.to_string())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
