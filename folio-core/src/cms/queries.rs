//! GROQ queries issued against the content lake.

pub const NAVIGATION: &str = r#"*[_type == "navigation"] | order(order asc){
  title,
  href,
  icon,
  isExternal,
  order
}"#;

pub const FEATURED_TESTIMONIALS: &str = r#"*[_type == "testimonial" && featured == true] | order(order asc){
  _id,
  name,
  position,
  company,
  testimonial,
  rating,
  "avatarUrl": avatar.asset->url,
  "companyLogoUrl": companyLogo.asset->url,
  linkedinUrl,
  featured,
  order
}"#;

pub const SKILLS: &str = r#"*[_type == "skill"] | order(category asc, order asc){
  name,
  category,
  proficiency,
  percentage,
  yearsOfExperience,
  color
}"#;
