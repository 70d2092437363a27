// Page wiring constants: element hooks, relay credentials and UI timings.

// Canvases
pub const STARS_CANVAS_ID: &str = "stars-canvas";
pub const MIST_CANVAS_ID: &str = "mist-canvas";

// Navigation
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const NAV_TOGGLE_SELECTOR: &str = ".nav__toggle";
pub const NAV_LIST_ID: &str = "nav-list";
pub const NAV_LINKS_SELECTOR: &str = ".nav__list a";
pub const NAV_OPEN_CLASS: &str = "is-open";
pub const NAV_ACTIVE_CLASS: &str = "is-active";

// Assets
pub const YEAR_ID: &str = "year";
pub const CV_BUTTON_ID: &str = "cv-download";
pub const PROFILE_IMG_SELECTOR: &str = ".hero__image img";
pub const TILT_SELECTOR: &str = "[data-tilt]";

// Contact
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const FORM_STATUS_CLASS: &str = "form-status";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const COPY_EMAIL_ID: &str = "copy-email";

pub const CONTACT_EMAIL: &str = "mohamed-yassir.sossey@epitech.eu";
pub const CONTACT_OWNER: &str = "Mohamed Yassir";
pub const SITE_NAME: &str = "cv-alternance.vercel.app";

// EmailJS relay (public browser credentials)
pub const EMAILJS_PUBLIC_KEY: &str = "9lJCpWDsiyxv5XdDv";
pub const EMAILJS_SERVICE_ID: &str = "service_cjgkasc";
pub const EMAILJS_TEMPLATE_ID: &str = "template_303mi36";
pub const EMAILJS_OK_STATUS: f64 = 200.0;

// Timings (ms)
pub const STATUS_CLEAR_MS: i32 = 5000;
pub const COPY_LABEL_RESET_MS: i32 = 2000;

pub const COPY_LABEL: &str = "Email";
pub const COPY_LABEL_DONE: &str = "Email copié !";
