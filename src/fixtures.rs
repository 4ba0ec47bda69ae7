// src/fixtures.rs

//! HTML fixtures shared by the unit tests.

pub const BASE: &str = "https://www.free-work.com";

pub const SEARCH_URL: &str = "https://www.free-work.com/fr/tech-it/jobs?query=rust";

pub const PIN: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";

pub const HOUSE: &str = "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z";

pub const CALENDAR: &str = "M19 3h-1V1h-2v2H8V1H6v2H5c-1.11 0-1.99.9-1.99 2L3 19c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm0 16H5V8h14v11zM7 10h5v5H7z";

/// A complete job detail page.
pub fn job_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head><title>Développeur Rust - Free-Work</title></head>
<body>
<nav aria-label="breadcrumb">
  <a href="/fr">Accueil</a>
  <a href="/fr/tech-it">Tech &amp; IT</a>
  <a href="/fr/tech-it/jobs/banque">Banque &amp; Finance</a>
</nav>
<main>
  <div class="flex flex-col text-white w-full px-4">
    <h1>Développeur Rust Senior</h1>
    <a href="/fr/tech-it/jobs/acme">ACME Conseil</a>
    <span>Paris, Île-de-France</span>
    <span>Freelance</span>
  </div>
  <time class="text-sm" datetime="2026-10-12">Publiée le 12/10/2026</time>
  <div class="grid">
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><path d="{PIN}"></path></svg>
      <span class="text-sm">  Paris,
        France </span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><path d="M0 0h24v24H0z"></path></svg>
      <span class="text-sm">Unknown glyph</span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><path d="M 10,20 v -6 h 4 v 6 h 5 v -8 h 3 L 12,3 2,12 h 3 v 8 z"></path></svg>
      <span class="text-sm">Télétravail partiel</span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><use href="#icon-euro"></use></svg>
      <span class="text-sm">550-650 €⁄j</span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><use href="#icon-clock"></use></svg>
      <span class="text-sm">6 mois</span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><use href="#icon-briefcase"></use></svg>
      <span class="text-sm">5 à 10 ans d'expérience</span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><path d="{CALENDAR}"></path></svg>
      <span class="text-sm"></span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><use href="#icon-calendar"></use></svg>
      <span class="text-sm">ASAP</span>
    </div>
    <div class="flex items-center py-1">
      <svg viewBox="0 0 24 24"><path d="{PIN}"></path></svg>
      <span class="text-sm">Lyon</span>
    </div>
  </div>
  <div class="prose-content">
    <p>Nous recherchons un développeur Rust.</p>
    <ul>
      <li>Tokio</li>
      <li>   Axum   </li>
    </ul>
  </div>
  <div class="skills">
    <span class="badge badge-primary">Rust</span>
    <span class="badge">Tokio</span>
    <span class="badge">Rust</span>
    <span class="badge">   </span>
    <a class="tag-link" href="/fr/tech-it/jobs/postgresql">PostgreSQL</a>
    <a class="tag-link" href="/fr/tech-it/jobs/tokio">Tokio</a>
    <a class="tag-link" href="#">This label is far too long to be a skill tag and should be dropped</a>
  </div>
</main>
</body>
</html>"##
    )
}

/// A job page whose icons come from a sprite sheet, in both `href` forms.
pub fn sprite_job_page() -> String {
    r##"<html><body><main>
  <div class="text-white w-full"><h1>Architecte Rust</h1></div>
  <div class="flex items-center py-1">
    <svg><use xlink:href="#icon-euro"></use></svg><span class="text-sm">600 €⁄j</span>
  </div>
  <div class="flex items-center py-1">
    <svg><use xlink:href="/sprite.svg#icon-clock"></use></svg><span class="text-sm">12 mois</span>
  </div>
  <div class="flex items-center py-1">
    <svg><use href="#icon-home"></use></svg><span class="text-sm">Full remote</span>
  </div>
</main></body></html>"##
        .to_string()
}

/// A minimal but valid job page with the given title.
pub fn simple_job_page(title: &str) -> String {
    format!(
        r#"<html><body><main>
  <div class="text-white w-full"><h1>{title}</h1><p>Company</p></div>
  <div class="flex items-center py-1">
    <svg><path d="{HOUSE}"></path></svg><span class="text-sm">100% remote</span>
  </div>
</main></body></html>"#
    )
}

/// A bot-challenge page without the job container.
pub fn challenge_page() -> String {
    r#"<html><head><title>Just a moment...</title></head>
<body><div id="challenge-form"><p>Checking your browser</p></div></body></html>"#
        .to_string()
}

/// Relative href of job `id`.
pub fn job_href(id: u32) -> String {
    format!("/fr/tech-it/developpeur/job-mission/mission-{id}")
}

/// Absolute URL of job `id`.
pub fn job_url(id: u32) -> String {
    format!("{BASE}{}", job_href(id))
}

/// A search results page listing `ids` with numbered pagination `1..=total`.
///
/// `current` is highlighted; a next control is rendered, disabled on the last
/// page. `total == 0` renders no pagination at all.
pub fn search_page(ids: &[u32], current: u32, total: u32) -> String {
    let cards: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<div class="card"><a href="{href}"><h2>Mission {id}</h2></a>
<a href="{href}#apply">Postuler</a><a href="/fr/tech-it/jobs/company-{id}">Company</a></div>"#,
                href = job_href(*id)
            )
        })
        .collect();

    let pagination = if total == 0 {
        String::new()
    } else {
        let buttons: String = (1..=total)
            .map(|n| {
                let current_attr = if n == current { r#" aria-current="page""# } else { "" };
                format!(r#"<button data-page="{n}"{current_attr}>{n}</button>"#)
            })
            .collect();
        let disabled = if current >= total { " disabled" } else { "" };
        format!(
            r#"<nav class="pagination">{buttons}<button aria-label="Page suivante"{disabled}>›</button></nav>"#
        )
    };

    format!(
        r#"<html><body><main>
<div data-testid="search-result">{cards}</div>
{pagination}
</main></body></html>"#
    )
}
