//! Application-wide constants: routes, limits and timings.

/// Page where a partner registers new equipment
pub const ADD_EQUIPMENT_ROUTE: &str = "/partenaire/ajouter-engin";

/// Partner dashboard: back link, cancel and post-submit redirect
pub const DASHBOARD_ROUTE: &str = "/partenaire/tableau-de-bord";

/// Simulated latency of the submission step
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// The file picker is disabled once this many images are selected
pub const MAX_IMAGES: usize = 5;

/// MIME filter of the file picker
pub const IMAGE_ACCEPT: &str = "image/*";

/// Fallback `src` for a preview with an empty reference
pub const PREVIEW_PLACEHOLDER: &str = "/placeholder.svg";
