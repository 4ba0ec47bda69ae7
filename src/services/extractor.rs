// src/services/extractor.rs

//! Job detail page extraction.
//!
//! Turns the rendered HTML of one job page into a [`JobRecord`]. Every field
//! is looked up independently: a missing element leaves that field empty and
//! nothing else. Only a page without the job container (error page, removed
//! listing, bot challenge) produces an error record.

use std::collections::{HashMap, HashSet};

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::models::{AttributeKind, JobRecord, JobStatus, SelectorConfig};
use crate::services::{icons, parse_selector};
use crate::utils::normalize_whitespace;

/// Skills longer than this are sentences caught by a loose selector.
const MAX_SKILL_LEN: usize = 50;

/// Header lines, in display order.
#[derive(Debug, Default)]
struct Header {
    title: Option<String>,
    company: Option<String>,
    company_location: Option<String>,
    category: Option<String>,
}

/// Compiled selectors for a job page.
struct JobSelectors {
    container: Selector,
    header: Selector,
    header_fallback: Selector,
    publish_date: Selector,
    publish_date_fallback: Selector,
    description: Selector,
    icon_row: Selector,
    icon_path: Selector,
    icon_use: Selector,
    icon_text: Selector,
    icon_text_fallback: Selector,
    skill_badge: Selector,
    skill_tag: Selector,
    breadcrumb_link: Selector,
    document_title: Selector,
}

/// Extracts job records from rendered detail pages.
pub struct JobExtractor {
    selectors: JobSelectors,
    container_selector: String,
}

impl JobExtractor {
    /// Compile the job page selectors.
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        let selectors = JobSelectors {
            container: parse_selector(&config.job_container)?,
            header: parse_selector(&config.job_header)?,
            header_fallback: parse_selector(&config.job_header_fallback)?,
            publish_date: parse_selector(&config.publish_date)?,
            publish_date_fallback: parse_selector(&config.publish_date_fallback)?,
            description: parse_selector(&config.description)?,
            icon_row: parse_selector(&config.icon_row)?,
            icon_path: parse_selector("path[d]")?,
            icon_use: parse_selector("use")?,
            icon_text: parse_selector(&config.icon_text)?,
            icon_text_fallback: parse_selector(&config.icon_text_fallback)?,
            skill_badge: parse_selector(&config.skill_badge)?,
            skill_tag: parse_selector(&config.skill_tag)?,
            breadcrumb_link: parse_selector(&config.breadcrumb_link)?,
            document_title: parse_selector("title")?,
        };

        log::debug!("Icon table holds {} signatures", icons::known_signatures());

        Ok(Self {
            selectors,
            container_selector: config.job_container.clone(),
        })
    }

    /// Build a record from one job page.
    ///
    /// Never fails: a page that is not a job page yields an error record
    /// carrying the URL and page number.
    pub fn extract(&self, html: &str, url: &str, page: u32) -> JobRecord {
        let document = Html::parse_document(html);

        if document.select(&self.selectors.container).next().is_none() {
            let title = self.document_title(&document);
            log::warn!(
                "No job container ({}) on {}: {}",
                self.container_selector,
                url,
                title.as_deref().unwrap_or("untitled page")
            );
            return JobRecord::failed(
                url,
                page,
                title,
                format!("job container '{}' not found", self.container_selector),
            );
        }

        let header = self.header(&document);
        let mut attributes = self.icon_attributes(&document);

        let record = JobRecord {
            title: header.title.unwrap_or_default(),
            company: header.company,
            company_location: header.company_location,
            category: header.category,
            location: attributes.remove(&AttributeKind::Location),
            remote: attributes.remove(&AttributeKind::Remote),
            salary: attributes.remove(&AttributeKind::Salary),
            duration: attributes.remove(&AttributeKind::Duration),
            experience: attributes.remove(&AttributeKind::Experience),
            start_date: attributes.remove(&AttributeKind::StartDate),
            publish_date: self.publish_date(&document),
            skills: self.skills(&document),
            sector: self.sector(&document),
            description: self.description(&document),
            job_url: url.to_string(),
            page,
            scraped_at: chrono::Utc::now(),
            status: JobStatus::Ok,
            error: None,
        };

        if record.title.is_empty() {
            log::warn!("Job header not found on {url}");
        }
        log::debug!("Extracted: {}", record.summary());
        record
    }

    /// Title, company, company location and category from the header block.
    fn header(&self, document: &Html) -> Header {
        let Some(block) = document
            .select(&self.selectors.header)
            .next()
            .or_else(|| document.select(&self.selectors.header_fallback).next())
        else {
            return Header::default();
        };

        let mut lines = text_lines(block).into_iter();
        Header {
            title: lines.next(),
            company: lines.next(),
            company_location: lines.next(),
            category: lines.next(),
        }
    }

    fn publish_date(&self, document: &Html) -> Option<String> {
        document
            .select(&self.selectors.publish_date)
            .next()
            .or_else(|| document.select(&self.selectors.publish_date_fallback).next())
            .and_then(element_text)
    }

    fn description(&self, document: &Html) -> Option<String> {
        let body = document.select(&self.selectors.description).next()?;
        let lines = text_lines(body);
        (!lines.is_empty()).then(|| lines.join("\n"))
    }

    /// Attribute values keyed by the kind of their icon.
    ///
    /// The first row of a kind that carries text wins. Rows with an unknown
    /// icon or no text are skipped.
    fn icon_attributes(&self, document: &Html) -> HashMap<AttributeKind, String> {
        let mut attributes = HashMap::new();

        for row in document.select(&self.selectors.icon_row) {
            let Some(signature) = self.icon_signature(row) else {
                continue;
            };
            let Some(kind) = icons::classify(signature) else {
                log::debug!("Unclassified icon skipped: {signature:.40}");
                continue;
            };
            let Some(value) = row
                .select(&self.selectors.icon_text)
                .next()
                .or_else(|| row.select(&self.selectors.icon_text_fallback).next())
                .and_then(element_text)
            else {
                continue;
            };
            attributes.entry(kind).or_insert(value);
        }

        attributes
    }

    /// Path data of the row's icon, or its sprite reference.
    fn icon_signature<'a>(&self, row: ElementRef<'a>) -> Option<&'a str> {
        row.select(&self.selectors.icon_path)
            .find_map(|path| path.value().attr("d"))
            .or_else(|| {
                row.select(&self.selectors.icon_use)
                    .find_map(sprite_href)
            })
    }

    /// Badges then tag links, deduplicated in page order.
    fn skills(&self, document: &Html) -> Vec<String> {
        let mut seen = HashSet::new();
        document
            .select(&self.selectors.skill_badge)
            .chain(document.select(&self.selectors.skill_tag))
            .filter_map(element_text)
            .filter(|skill| skill.chars().count() < MAX_SKILL_LEN)
            .filter(|skill| seen.insert(skill.clone()))
            .collect()
    }

    /// Last breadcrumb entry, when the trail is deep enough to name a sector.
    fn sector(&self, document: &Html) -> Option<String> {
        let links: Vec<_> = document.select(&self.selectors.breadcrumb_link).collect();
        if links.len() < 2 {
            return None;
        }
        links.last().copied().and_then(element_text)
    }

    fn document_title(&self, document: &Html) -> Option<String> {
        document
            .select(&self.selectors.document_title)
            .next()
            .and_then(element_text)
    }
}

/// `href` of a `<use>` element, plain or `xlink:href`.
///
/// Inside SVG the parser files `xlink:href` under the XLink namespace, so a
/// lookup by the plain name misses it; match on the local name instead.
fn sprite_href(element: ElementRef<'_>) -> Option<&str> {
    element
        .value()
        .attrs()
        .find(|(name, _)| *name == "href")
        .map(|(_, value)| value)
}

/// Whitespace-normalized text of an element, `None` when blank.
fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text = normalize_whitespace(&element.text().collect::<Vec<_>>().join(" "));
    (!text.is_empty()).then_some(text)
}

/// Non-empty trimmed lines of an element's text nodes.
fn text_lines(element: ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
