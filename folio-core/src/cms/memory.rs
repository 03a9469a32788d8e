//! In-process content source, used for demos and router tests.

use async_trait::async_trait;
use folio_model::{
    ContactDocument, NavigationEntry, SkillRecord, TestimonialRecord,
};
use tokio::sync::Mutex;

use super::CmsClient;
use crate::error::Result;
use crate::testimonials::featured_in_order;

#[derive(Debug, Default)]
pub struct InMemoryCms {
    navigation: Vec<NavigationEntry>,
    testimonials: Vec<TestimonialRecord>,
    skills: Vec<SkillRecord>,
    contacts: Mutex<Vec<ContactDocument>>,
}

impl InMemoryCms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_navigation(mut self, entries: Vec<NavigationEntry>) -> Self {
        self.navigation = entries;
        self
    }

    pub fn with_testimonials(mut self, records: Vec<TestimonialRecord>) -> Self {
        self.testimonials = records;
        self
    }

    pub fn with_skills(mut self, skills: Vec<SkillRecord>) -> Self {
        self.skills = skills;
        self
    }

    /// Contact documents stored so far, oldest first.
    pub async fn contacts(&self) -> Vec<ContactDocument> {
        self.contacts.lock().await.clone()
    }
}

#[async_trait]
impl CmsClient for InMemoryCms {
    async fn navigation(&self) -> Result<Vec<NavigationEntry>> {
        let mut entries = self.navigation.clone();
        entries.sort_by_key(|e| e.order.unwrap_or(0));
        Ok(entries)
    }

    async fn featured_testimonials(&self) -> Result<Vec<TestimonialRecord>> {
        Ok(featured_in_order(&self.testimonials))
    }

    async fn skills(&self) -> Result<Vec<SkillRecord>> {
        Ok(self.skills.clone())
    }

    async fn create_contact(&self, document: &ContactDocument) -> Result<String> {
        let mut contacts = self.contacts.lock().await;
        contacts.push(document.clone());
        Ok(format!("contact-{}", contacts.len()))
    }
}
