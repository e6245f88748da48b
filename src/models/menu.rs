//! Menu document model
//!
//! Ordered sections of priced items plus the display options printed with
//! them. The model performs no content validation: names and prices are opaque
//! display strings. Items without a name stay in the editable structure and
//! are only filtered out when the rendered view is built.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// A single priced menu entry
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,

    /// Price in the primary currency (opaque display string)
    #[serde(default, alias = "priceBGN")]
    pub primary_price: Option<String>,

    /// Price in the secondary currency (opaque display string)
    #[serde(default, alias = "priceEUR")]
    pub secondary_price: Option<String>,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, primary: &str, secondary: &str) -> Self {
        Self {
            name: name.into(),
            primary_price: non_empty(primary),
            secondary_price: non_empty(secondary),
        }
    }

    /// An item is rendered only once it has a name.
    pub fn is_renderable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A titled group of items
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn renderable_items(&self) -> impl Iterator<Item = (usize, &MenuItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_renderable())
    }

    pub fn has_renderable_items(&self) -> bool {
        self.items.iter().any(MenuItem::is_renderable)
    }
}

/// Embeddable background image payload (`data:<mime>;base64,...`)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    pub data_url: String,
}

impl BackgroundImage {
    /// Encode raw file bytes as a data URL.
    ///
    /// The MIME type is sniffed from the leading bytes where possible and falls
    /// back to `declared_mime`; the browser's decoder is the only validator.
    pub fn from_bytes(bytes: &[u8], declared_mime: &str) -> Self {
        let mime = sniff_image_mime(bytes).unwrap_or_else(|| {
            if declared_mime.trim().is_empty() {
                "application/octet-stream"
            } else {
                declared_mime.trim()
            }
        });
        Self {
            data_url: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        }
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
    }
}

fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Read-only view of one section as it appears in the rendered menu
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSection<'a> {
    /// Position of the section in the editable document
    pub section_index: usize,
    pub title: &'a str,
    /// `(editable index, item)` pairs, named items only
    pub items: Vec<(usize, &'a MenuItem)>,
}

/// The live, editable menu
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuDocument {
    pub sections: Vec<Section>,

    #[serde(default)]
    pub show_date: bool,

    #[serde(default)]
    pub menu_date: String,

    #[serde(default)]
    pub background_image: Option<BackgroundImage>,
}

impl Default for MenuDocument {
    fn default() -> Self {
        Self::sample()
    }
}

impl MenuDocument {
    /// Empty document with no sections
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
            show_date: false,
            menu_date: String::new(),
            background_image: None,
        }
    }

    /// Lunch menu every fresh editor starts from
    pub fn sample() -> Self {
        Self {
            sections: vec![
                Section::with_items(
                    "Супи",
                    vec![
                        MenuItem::new("Шкембе", "3.91", "2"),
                        MenuItem::new("Пилешка", "3.91", "2"),
                        MenuItem::new("Картофена", "3.91", "2"),
                    ],
                ),
                Section::with_items(
                    "Ястия",
                    vec![
                        MenuItem::new("Мусака", "5.87", "3"),
                        MenuItem::new("Пилешко бутче с ориз", "6.84", "3.5"),
                        MenuItem::new("Риба „Хек\" с ориз", "7.82", "4"),
                        MenuItem::new("Зеле със свинско на фурна", "6.84", "3.5"),
                    ],
                ),
                Section::with_items("Десерти", vec![MenuItem::new("Торта", "3.91", "2")]),
            ],
            show_date: false,
            menu_date: chrono::Local::now().format("%d.%m.%Y").to_string(),
            background_image: None,
        }
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    /// Append a new empty section and return its index
    pub fn add_section(&mut self, title: impl Into<String>) -> usize {
        self.sections.push(Section::new(title));
        self.sections.len() - 1
    }

    /// Insert a section at `index` (`index == len` appends)
    pub fn insert_section(&mut self, index: usize, section: Section) -> Result<()> {
        if index > self.sections.len() {
            return Err(self.section_error(index));
        }
        self.sections.insert(index, section);
        Ok(())
    }

    pub fn remove_section(&mut self, index: usize) -> Result<Section> {
        self.check_section(index)?;
        Ok(self.sections.remove(index))
    }

    /// Move the section at `from` so that it ends up at position `to`
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_section(from)?;
        self.check_section(to)?;
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        Ok(())
    }

    pub fn set_section_title(&mut self, index: usize, title: impl Into<String>) -> Result<()> {
        self.section_mut(index)?.title = title.into();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Items
    // ------------------------------------------------------------------

    /// Append an empty item to a section and return its index
    pub fn add_item(&mut self, section: usize) -> Result<usize> {
        let items = &mut self.section_mut(section)?.items;
        items.push(MenuItem::default());
        Ok(items.len() - 1)
    }

    pub fn insert_item(&mut self, section: usize, index: usize, item: MenuItem) -> Result<()> {
        let items = &mut self.section_mut(section)?.items;
        if index > items.len() {
            return Err(MenuError::ItemOutOfBounds {
                section,
                index,
                len: items.len(),
            });
        }
        items.insert(index, item);
        Ok(())
    }

    pub fn remove_item(&mut self, section: usize, index: usize) -> Result<MenuItem> {
        self.check_item(section, index)?;
        Ok(self.sections[section].items.remove(index))
    }

    pub fn move_item(&mut self, section: usize, from: usize, to: usize) -> Result<()> {
        self.check_item(section, from)?;
        self.check_item(section, to)?;
        let items = &mut self.sections[section].items;
        let item = items.remove(from);
        items.insert(to, item);
        Ok(())
    }

    pub fn set_item_name(
        &mut self,
        section: usize,
        index: usize,
        name: impl Into<String>,
    ) -> Result<()> {
        self.item_mut(section, index)?.name = name.into();
        Ok(())
    }

    /// Set both prices; an empty string clears the corresponding price.
    pub fn set_item_prices(
        &mut self,
        section: usize,
        index: usize,
        primary: &str,
        secondary: &str,
    ) -> Result<()> {
        let item = self.item_mut(section, index)?;
        item.primary_price = non_empty(primary);
        item.secondary_price = non_empty(secondary);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Display options
    // ------------------------------------------------------------------

    pub fn set_show_date(&mut self, show: bool) {
        self.show_date = show;
    }

    pub fn set_menu_date(&mut self, date: impl Into<String>) {
        self.menu_date = date.into();
    }

    pub fn set_background_image(&mut self, image: BackgroundImage) {
        self.background_image = Some(image);
    }

    pub fn clear_background_image(&mut self) {
        self.background_image = None;
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// Sections as they appear in the rendered menu: unnamed items dropped,
    /// sections left without items dropped, editable indices preserved.
    pub fn rendered_sections(&self) -> Vec<RenderedSection<'_>> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.has_renderable_items())
            .map(|(section_index, section)| RenderedSection {
                section_index,
                title: &section.title,
                items: section.renderable_items().collect(),
            })
            .collect()
    }

    /// Date stamp to print, if enabled and non-empty
    pub fn date_stamp(&self) -> Option<&str> {
        let date = self.menu_date.trim();
        (self.show_date && !date.is_empty()).then_some(date)
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    fn check_section(&self, index: usize) -> Result<()> {
        if index >= self.sections.len() {
            return Err(self.section_error(index));
        }
        Ok(())
    }

    fn check_item(&self, section: usize, index: usize) -> Result<()> {
        self.check_section(section)?;
        let len = self.sections[section].items.len();
        if index >= len {
            return Err(MenuError::ItemOutOfBounds { section, index, len });
        }
        Ok(())
    }

    fn section_error(&self, index: usize) -> MenuError {
        MenuError::SectionOutOfBounds {
            index,
            len: self.sections.len(),
        }
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut Section> {
        self.check_section(index)?;
        Ok(&mut self.sections[index])
    }

    fn item_mut(&mut self, section: usize, index: usize) -> Result<&mut MenuItem> {
        self.check_item(section, index)?;
        Ok(&mut self.sections[section].items[index])
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
