pub const DEFAULT_TEMPLATE_PATH: &str = "lab/starter-template.html";

pub const CHALLENGE_1_TITLE: &str = "The Responsive Card";
pub const CHALLENGE_2_TITLE: &str = "The Adaptive Navigation";
pub const CHALLENGE_3_TITLE: &str = "The Content Choreographer";
pub const INTEGRATION_TITLE: &str = "Cross-Challenge Integration";

/// Marker text the main dashboard block must contain.
pub const MAIN_CONTENT_MARKER: &str = "Main Dashboard";

pub const NEXT_STEPS: [&str; 4] = [
    "Fix any errors shown above",
    "Test the layout by resizing the browser window",
    "Run the validator again after each change",
    "Check the lab page for interactive feedback",
];
