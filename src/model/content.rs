//! Static site content
//!
//! Everything the page shows that is not interactive state: texts, gallery
//! items, contacts. The defaults reproduce the artist's site; a YAML file can
//! replace them wholesale.

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn non_digits() -> &'static Regex {
    static NON_DIGITS: OnceLock<Regex> = OnceLock::new();
    NON_DIGITS.get_or_init(|| Regex::new(r"\D").expect("valid pattern"))
}

/// A single artwork in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    /// Asset path relative to the base URL, or an absolute URL
    pub src: String,
    /// Caption, also used as alt text
    pub alt: String,
}

/// Base URL prefix for static assets (sub-path hosting)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBase(String);

impl Default for AssetBase {
    fn default() -> Self {
        Self("/".to_string())
    }
}

impl AssetBase {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        if base.is_empty() {
            Self::default()
        } else {
            Self(base)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a relative asset path onto the base. Absolute URLs pass through.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub pill: String,
    pub title: String,
    pub subtitle: String,
    pub lead: String,
    pub portrait_src: String,
    pub portrait_alt: String,
    pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub practice_title: String,
    pub practice: String,
    pub process_title: String,
    pub process_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Phone as displayed, e.g. `+7 (911) 916-33-64`
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl ContactInfo {
    /// `tel:` URI with formatting stripped
    pub fn tel_uri(&self) -> String {
        let trimmed = self.phone.trim();
        let (plus, rest) = match trimmed.strip_prefix('+') {
            Some(rest) => ("+", rest),
            None => ("", trimmed),
        };
        format!("tel:{}{}", plus, non_digits().replace_all(rest, ""))
    }

    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

/// Whole-page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub gallery: Vec<GalleryItem>,
    pub contacts: ContactInfo,
}

impl Default for SiteContent {
    fn default() -> Self {
        let gallery = (1..=5)
            .map(|i| GalleryItem {
                id: i,
                src: format!("works/Art{}.jpg", i),
                alt: format!("Работа {}", i),
            })
            .collect();

        Self {
            brand: "Кретова Арина".to_string(),
            hero: HeroContent {
                pill: "Художница • Санкт-Петербург".to_string(),
                title: "Кретова Арина".to_string(),
                subtitle: "живопись, графика, портреты".to_string(),
                lead: "Я цифровой художник, создающий работы на стыке реальности и \
                       воображения. Специализируюсь на иллюстрациях и скетчах, в которых \
                       каждая деталь дышит, а цвет передает историю. Люблю работать с \
                       фактурой — будь то шероховатость старой стены, мягкость ткани или \
                       игра света на стекле. Беру заказы на портреты, интерьерные работы и \
                       книжную иллюстрацию. Предпочитаю рисовать с эскиза, чтобы вместе с \
                       вами поймать идею с самого начала."
                    .to_string(),
                portrait_src: "other/myMain.jfif".to_string(),
                portrait_alt: "Кретова А.А.".to_string(),
                facts: vec![
                    Fact {
                        key: "Срок".to_string(),
                        value: "от 3–10 дней".to_string(),
                    },
                    Fact {
                        key: "Форматы".to_string(),
                        value: "По договоренности".to_string(),
                    },
                    Fact {
                        key: "Материалы".to_string(),
                        value: "холст, бумага, цифровой файл".to_string(),
                    },
                ],
            },
            about: AboutContent {
                practice_title: "Чем занимаюсь".to_string(),
                practice: "Я рассматриваю заказ как соавторство. Ваше видение и задачи — \
                           отправная точка. Отталкиваясь от них, я предлагаю художественные \
                           решения, исследую с вами разные пути в композиции и цвете."
                    .to_string(),
                process_title: "Как проходит заказ".to_string(),
                process_steps: vec![
                    "Обсуждение идеи, референсы, формат".to_string(),
                    "Эскиз и согласование".to_string(),
                    "Работа над финалом + фото процесса (по желанию)".to_string(),
                    "Упаковка и передача".to_string(),
                ],
            },
            gallery,
            contacts: ContactInfo {
                phone: "+7 (911) 916-33-64".to_string(),
                email: "kretova.arisha@mail.ru".to_string(),
                socials: vec![SocialLink {
                    label: "Telegram".to_string(),
                    url: "https://t.me/Ashid0_mina".to_string(),
                }],
            },
        }
    }
}

impl SiteContent {
    /// Load content from a YAML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content file {}", path.display()))?;
        let content: SiteContent = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse content file {}", path.display()))?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants the page relies on
    pub fn validate(&self) -> Result<()> {
        if self.gallery.is_empty() {
            bail!("Gallery must contain at least one item");
        }

        let mut seen = HashSet::new();
        for item in &self.gallery {
            if !seen.insert(item.id) {
                bail!("Duplicate gallery id {}", item.id);
            }
            if item.src.trim().is_empty() {
                bail!("Gallery item {} has an empty src", item.id);
            }
        }

        Ok(())
    }

    pub fn gallery_item(&self, id: u32) -> Option<&GalleryItem> {
        self.gallery.iter().find(|item| item.id == id)
    }
}
