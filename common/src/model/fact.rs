/// Fun facts listed under the ReactFacts banner.
pub const FACTS: [&str; 5] = [
    "Was first released in 2013",
    "Was originally created by Jordan Walke",
    "Has well over 200K stars on GitHub",
    "Is maintained by Meta",
    "Powers thousands of enterprise apps, including mobile apps",
];
