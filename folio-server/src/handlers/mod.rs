pub mod contact;
pub mod dock;
pub mod health;
pub mod skills;
pub mod testimonials;
