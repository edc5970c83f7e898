// Landing page sections

mod case_studies;
mod contact;
mod footer;
mod hero;
mod services;

pub use case_studies::CaseStudies;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use services::Services;
