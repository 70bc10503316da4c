//! Knowledge base articles inserted on first start

pub struct SeedArticle {
    pub title: &'static str,
    pub body: &'static str,
    pub category: &'static str,
}

pub const SEED_ARTICLES: [SeedArticle; 6] = [
    SeedArticle {
        title: "How do I reset my password?",
        body: "To reset your password, click \"Forgot my password\" on the login page. You will receive an email with a link to create a new password. The link is valid for 24 hours.",
        category: "Account",
    },
    SeedArticle {
        title: "How do I open a support ticket?",
        body: "Go to the \"New Ticket\" section and fill in the required fields: your email, the problem title and a detailed description. You can pick a priority (low, medium or high). After submitting you will receive a tracking ID to follow your ticket.",
        category: "General",
    },
    SeedArticle {
        title: "What is the average response time?",
        body: "Our support team answers within 4 hours for high priority tickets, 8 hours for medium and 24 hours for low priority. You will be notified by email when an agent replies to your ticket.",
        category: "Support",
    },
    SeedArticle {
        title: "How do I close my account?",
        body: "You can close your account from your account settings. Click \"Settings\" > \"Delete Account\". All of your data is removed after 30 days.",
        category: "Account",
    },
    SeedArticle {
        title: "Login problems",
        body: "If you cannot log in, check that: 1) your email is correct, 2) caps lock is off, 3) you are using the right password. If the problem persists, use the \"Forgot my password\" option.",
        category: "Common Problems",
    },
    SeedArticle {
        title: "How do I update my profile?",
        body: "Open your profile settings and click \"Edit Information\". You can update your name, email, profile picture and other details. Click \"Save\" to confirm the changes.",
        category: "Account",
    },
];
