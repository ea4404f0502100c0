//! Filter selections and request builders for the generator and library
//! screens.
//!
//! The generator shares one filter panel across its three tabs. Sector
//! belongs to the jobs arm; category and source belong to the news arm.
//! The request builders only forward the fields of the active arm, so a
//! value left over from a previous selection can never leak into a
//! request body.

use portal_client::{
    GenerateBlogRequest, GenerateSocialRequest, GenerateTitlesRequest, ListContentRequest,
    ListTitlesRequest, SaveTitleRequest, SourceType,
};

/// Title batch sizes offered by the generator.
pub const TITLE_COUNT_OPTIONS: &[u8] = &[3, 5, 7, 10];

/// Shared filter selections for the content generator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratorFilters {
    pub source_type: SourceType,
    pub sector: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
}

impl GeneratorFilters {
    /// Switching source type clears every retained filter value.
    pub fn set_source_type(&mut self, source_type: SourceType) {
        self.source_type = source_type;
        self.sector = None;
        self.category = None;
        self.source = None;
    }

    fn active_sector(&self) -> Option<String> {
        match self.source_type {
            SourceType::Jobs => self.sector.clone(),
            SourceType::News => None,
        }
    }

    fn active_category(&self) -> Option<String> {
        match self.source_type {
            SourceType::News => self.category.clone(),
            SourceType::Jobs => None,
        }
    }

    fn active_source(&self) -> Option<String> {
        match self.source_type {
            SourceType::News => self.source.clone(),
            SourceType::Jobs => None,
        }
    }

    pub fn generate_titles_request(&self, count: u8) -> GenerateTitlesRequest {
        GenerateTitlesRequest {
            source_type: self.source_type,
            count: Some(count),
            sector: self.active_sector(),
            category: self.active_category(),
            source: self.active_source(),
            ..Default::default()
        }
    }

    pub fn save_title_request(&self, title: &str) -> SaveTitleRequest {
        SaveTitleRequest {
            source_type: self.source_type,
            title: title.to_string(),
            filter_sector: self.active_sector(),
            filter_category: self.active_category(),
            filter_source: self.active_source(),
            ..Default::default()
        }
    }

    pub fn generate_social_request(&self, title: &str, tone: SocialTone) -> GenerateSocialRequest {
        GenerateSocialRequest {
            title: Some(title.to_string()),
            source_type: self.source_type,
            tone: Some(tone.value().to_string()),
            filter_sector: self.active_sector(),
            filter_category: self.active_category(),
            filter_source: self.active_source(),
            ..Default::default()
        }
    }

    pub fn generate_blog_request(
        &self,
        title: &str,
        tone: BlogTone,
        length: BlogLength,
    ) -> GenerateBlogRequest {
        GenerateBlogRequest {
            title: title.to_string(),
            source_type: self.source_type,
            tone: Some(tone.value().to_string()),
            length: Some(length.value().to_string()),
            filter_sector: self.active_sector(),
            filter_category: self.active_category(),
            filter_source: self.active_source(),
            ..Default::default()
        }
    }

    /// Saved-titles panel next to the generator: current filters, most
    /// recent 50.
    pub fn saved_titles_request(&self) -> ListTitlesRequest {
        ListTitlesRequest {
            source_type: Some(self.source_type),
            filter_sector: self.active_sector(),
            filter_category: self.active_category(),
            filter_source: self.active_source(),
            limit: Some(50),
            ..Default::default()
        }
    }

    /// Saved social/blog panel next to the generator.
    pub fn saved_content_request(&self) -> ListContentRequest {
        ListContentRequest {
            source_type: Some(self.source_type),
            filter_sector: self.active_sector(),
            filter_category: self.active_category(),
            filter_source: self.active_source(),
            limit: Some(50),
            ..Default::default()
        }
    }
}

/// Saved-titles tab filters in the library.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TitleLibraryFilters {
    pub source_type: Option<SourceType>,
    /// None shows everything, Some(false) unused only, Some(true) used only.
    pub usage: Option<bool>,
}

impl TitleLibraryFilters {
    pub fn request(&self) -> ListTitlesRequest {
        ListTitlesRequest {
            source_type: self.source_type,
            is_used: self.usage,
            ..Default::default()
        }
    }
}

/// Social and blog tab filters in the library.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentLibraryFilters {
    pub source_type: Option<SourceType>,
    pub published: Option<bool>,
}

impl ContentLibraryFilters {
    pub fn request(&self) -> ListContentRequest {
        ListContentRequest {
            source_type: self.source_type,
            is_published: self.published,
            ..Default::default()
        }
    }
}

/// Tone options for social media posts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SocialTone {
    #[default]
    Professional,
    Casual,
    Enthusiastic,
    Informative,
}

impl SocialTone {
    /// Wire value sent to the backend.
    pub fn value(&self) -> &'static str {
        match self {
            SocialTone::Professional => "professional",
            SocialTone::Casual => "casual",
            SocialTone::Enthusiastic => "enthusiastic",
            SocialTone::Informative => "informative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialTone::Professional => "Professional",
            SocialTone::Casual => "Casual",
            SocialTone::Enthusiastic => "Enthusiastic",
            SocialTone::Informative => "Informative",
        }
    }

    pub fn variants() -> &'static [SocialTone] {
        &[
            SocialTone::Professional,
            SocialTone::Casual,
            SocialTone::Enthusiastic,
            SocialTone::Informative,
        ]
    }

    pub fn from_value(value: &str) -> Option<SocialTone> {
        Self::variants().iter().copied().find(|t| t.value() == value)
    }
}

/// Tone options for blog articles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlogTone {
    #[default]
    Professional,
    Casual,
    Technical,
    Conversational,
}

impl BlogTone {
    pub fn value(&self) -> &'static str {
        match self {
            BlogTone::Professional => "professional",
            BlogTone::Casual => "casual",
            BlogTone::Technical => "technical",
            BlogTone::Conversational => "conversational",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlogTone::Professional => "Professional",
            BlogTone::Casual => "Casual",
            BlogTone::Technical => "Technical",
            BlogTone::Conversational => "Conversational",
        }
    }

    pub fn variants() -> &'static [BlogTone] {
        &[
            BlogTone::Professional,
            BlogTone::Casual,
            BlogTone::Technical,
            BlogTone::Conversational,
        ]
    }

    pub fn from_value(value: &str) -> Option<BlogTone> {
        Self::variants().iter().copied().find(|t| t.value() == value)
    }
}

/// Target length options for blog articles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlogLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl BlogLength {
    pub fn value(&self) -> &'static str {
        match self {
            BlogLength::Short => "short",
            BlogLength::Medium => "medium",
            BlogLength::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlogLength::Short => "Short (~500 words)",
            BlogLength::Medium => "Medium (~1000 words)",
            BlogLength::Long => "Long (~1500 words)",
        }
    }

    pub fn variants() -> &'static [BlogLength] {
        &[BlogLength::Short, BlogLength::Medium, BlogLength::Long]
    }

    pub fn from_value(value: &str) -> Option<BlogLength> {
        Self::variants().iter().copied().find(|l| l.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news_filters() -> GeneratorFilters {
        GeneratorFilters {
            source_type: SourceType::News,
            category: Some("Technology".to_string()),
            source: Some("TechDaily".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_switching_source_type_clears_filters() {
        let mut filters = news_filters();
        filters.set_source_type(SourceType::Jobs);

        assert_eq!(filters.source_type, SourceType::Jobs);
        assert!(filters.sector.is_none());
        assert!(filters.category.is_none());
        assert!(filters.source.is_none());
    }

    #[test]
    fn test_jobs_request_never_carries_news_filters() {
        // Stale news values alongside a jobs selection must not leak out
        let filters = GeneratorFilters {
            source_type: SourceType::Jobs,
            sector: Some("Engineering".to_string()),
            category: Some("Technology".to_string()),
            source: Some("TechDaily".to_string()),
        };

        let request = filters.generate_titles_request(5);
        assert_eq!(request.source_type, SourceType::Jobs);
        assert_eq!(request.count, Some(5));
        assert_eq!(request.sector.as_deref(), Some("Engineering"));
        assert!(request.category.is_none());
        assert!(request.source.is_none());
    }

    #[test]
    fn test_news_request_never_carries_sector() {
        let mut filters = news_filters();
        filters.sector = Some("Engineering".to_string());

        let request = filters.save_title_request("Tech hiring is up");
        assert_eq!(request.title, "Tech hiring is up");
        assert!(request.filter_sector.is_none());
        assert_eq!(request.filter_category.as_deref(), Some("Technology"));
        assert_eq!(request.filter_source.as_deref(), Some("TechDaily"));
    }

    #[test]
    fn test_social_request_carries_tone_and_title() {
        let filters = GeneratorFilters::default();
        let request = filters.generate_social_request("Big news", SocialTone::Casual);

        assert_eq!(request.title.as_deref(), Some("Big news"));
        assert_eq!(request.tone.as_deref(), Some("casual"));
        assert_eq!(request.source_type, SourceType::Jobs);
        assert!(request.topic.is_empty());
    }

    #[test]
    fn test_blog_request_carries_length() {
        let filters = GeneratorFilters::default();
        let request = filters.generate_blog_request("Deep dive", BlogTone::Technical, BlogLength::Long);

        assert_eq!(request.title, "Deep dive");
        assert_eq!(request.tone.as_deref(), Some("technical"));
        assert_eq!(request.length.as_deref(), Some("long"));
    }

    #[test]
    fn test_saved_lists_are_scoped_to_current_filters() {
        let filters = news_filters();
        let request = filters.saved_content_request();

        assert_eq!(request.source_type, Some(SourceType::News));
        assert_eq!(request.filter_category.as_deref(), Some("Technology"));
        assert_eq!(request.limit, Some(50));
        assert!(request.is_published.is_none());
    }

    #[test]
    fn test_library_usage_filter_is_tristate() {
        let mut filters = TitleLibraryFilters::default();
        assert!(filters.request().is_used.is_none());

        filters.usage = Some(false);
        assert_eq!(filters.request().is_used, Some(false));

        filters.usage = Some(true);
        assert_eq!(filters.request().is_used, Some(true));
    }

    #[test]
    fn test_tone_round_trips_through_wire_value() {
        for tone in SocialTone::variants() {
            assert_eq!(SocialTone::from_value(tone.value()), Some(*tone));
        }
        assert!(SocialTone::from_value("sarcastic").is_none());
        assert_eq!(BlogLength::from_value("long"), Some(BlogLength::Long));
    }
}
