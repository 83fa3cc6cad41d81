//! Rule preset categories.

use serde::{Deserialize, Serialize};

/// A preset that enables a group of rules, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "vue3-essential")]
    Vue3Essential,
    #[serde(rename = "vue3-strongly-recommended")]
    Vue3StronglyRecommended,
    #[serde(rename = "vue3-recommended")]
    Vue3Recommended,
    #[serde(rename = "essential")]
    Essential,
    #[serde(rename = "strongly-recommended")]
    StronglyRecommended,
    #[serde(rename = "recommended")]
    Recommended,
}

impl Category {
    /// Every category, in the order sections are rendered.
    pub const ALL: [Category; 7] = [
        Category::Base,
        Category::Vue3Essential,
        Category::Vue3StronglyRecommended,
        Category::Vue3Recommended,
        Category::Essential,
        Category::StronglyRecommended,
        Category::Recommended,
    ];

    /// Preset id used in `extends: plugin:vue/{id}`.
    pub fn id(self) -> &'static str {
        match self {
            Category::Base => "base",
            Category::Vue3Essential => "vue3-essential",
            Category::Vue3StronglyRecommended => "vue3-strongly-recommended",
            Category::Vue3Recommended => "vue3-recommended",
            Category::Essential => "essential",
            Category::StronglyRecommended => "strongly-recommended",
            Category::Recommended => "recommended",
        }
    }

    /// Section title.
    pub fn title(self) -> &'static str {
        match self {
            Category::Base => "Base Rules (Enabling Correct ESLint Parsing)",
            Category::Vue3Essential => "Priority A: Essential (Error Prevention) for Vue.js 3.x",
            Category::Vue3StronglyRecommended => {
                "Priority B: Strongly Recommended (Improving Readability) for Vue.js 3.x"
            }
            Category::Vue3Recommended => {
                "Priority C: Recommended (Minimizing Arbitrary Choices and Cognitive Overhead) for Vue.js 3.x"
            }
            Category::Essential => "Priority A: Essential (Error Prevention) for Vue.js 2.x",
            Category::StronglyRecommended => {
                "Priority B: Strongly Recommended (Improving Readability) for Vue.js 2.x"
            }
            Category::Recommended => {
                "Priority C: Recommended (Minimizing Arbitrary Choices and Cognitive Overhead) for Vue.js 2.x"
            }
        }
    }
}
