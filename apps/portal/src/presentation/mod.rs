// Presentation Binding: enum values and numeric bands to display tokens.

pub mod tokens;

pub use tokens::{
    badge_token, completeness_token, label, score_token, streak_token, DisplayToken,
    Vocabulary,
};
