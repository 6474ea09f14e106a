//! Typed layout configuration handed to the host rendering layer.
//!
//! The renderer consumes this as a plain object (see [`crate::layout_config`]);
//! on the Rust side every option is an enum so an invalid combination cannot
//! be constructed. Host-supplied overrides go through [`std::str::FromStr`]
//! and are rejected when the option is not recognized.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string that does not name a known option for the given field.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized {field} option: {value}")]
pub struct UnknownOption {
    field: &'static str,
    value: String,
}

impl UnknownOption {
    fn new(field: &'static str, value: &str) -> Self {
        Self { field, value: value.to_string() }
    }
}

/// How wide the main content area renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentWidth {
    Boxed,
    Fluid,
}

impl FromStr for ContentWidth {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boxed" => Ok(ContentWidth::Boxed),
            "fluid" => Ok(ContentWidth::Fluid),
            other => Err(UnknownOption::new("content width", other)),
        }
    }
}

/// Orientation of the primary navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentLayoutNav {
    Vertical,
    Horizontal,
}

impl FromStr for ContentLayoutNav {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(ContentLayoutNav::Vertical),
            "horizontal" => Ok(ContentLayoutNav::Horizontal),
            other => Err(UnknownOption::new("navigation layout", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarType {
    Sticky,
    Static,
    Hidden,
}

impl FromStr for NavbarType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sticky" => Ok(NavbarType::Sticky),
            "static" => Ok(NavbarType::Static),
            "hidden" => Ok(NavbarType::Hidden),
            other => Err(UnknownOption::new("navbar type", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterType {
    Sticky,
    Static,
    Hidden,
}

impl FromStr for FooterType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sticky" => Ok(FooterType::Sticky),
            "static" => Ok(FooterType::Static),
            "hidden" => Ok(FooterType::Hidden),
            other => Err(UnknownOption::new("footer type", other)),
        }
    }
}

/// Opaque icon identifier resolved by the host icon set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconProps {
    pub icon: String,
}

impl IconProps {
    pub fn new(icon: &str) -> Self {
        Self { icon: icon.to_string() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nConfig {
    pub enable: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub title: String,
    pub content_width: ContentWidth,
    pub content_layout_nav: ContentLayoutNav,
    /// Below this viewport width (px) the vertical nav renders as an overlay.
    pub overlay_nav_from_breakpoint: u32,
    pub i18n: I18nConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarConfig {
    #[serde(rename = "type")]
    pub navbar_type: NavbarType,
    pub navbar_blur: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(rename = "type")]
    pub footer_type: FooterType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalNavConfig {
    pub is_vertical_nav_collapsed: bool,
    pub default_nav_item_icon: IconProps,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconsConfig {
    pub chevron_down: IconProps,
    pub chevron_right: IconProps,
    pub close: IconProps,
    pub vertical_nav_pinned: IconProps,
    #[serde(rename = "verticalNavUnPinned")]
    pub vertical_nav_unpinned: IconProps,
    pub section_title_placeholder: IconProps,
}

/// The full layout configuration, read-only after startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub app: AppConfig,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub vertical_nav: VerticalNavConfig,
    pub icons: IconsConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            app: AppConfig {
                title: "my-layout".to_string(),
                content_width: ContentWidth::Boxed,
                content_layout_nav: ContentLayoutNav::Vertical,
                overlay_nav_from_breakpoint: 960,
                i18n: I18nConfig { enable: true },
            },
            navbar: NavbarConfig {
                navbar_type: NavbarType::Sticky,
                navbar_blur: true,
            },
            footer: FooterConfig {
                footer_type: FooterType::Static,
            },
            vertical_nav: VerticalNavConfig {
                is_vertical_nav_collapsed: false,
                default_nav_item_icon: IconProps::new("tabler-circle"),
            },
            icons: IconsConfig {
                chevron_down: IconProps::new("tabler-chevron-down"),
                chevron_right: IconProps::new("tabler-chevron-right"),
                close: IconProps::new("tabler-x"),
                vertical_nav_pinned: IconProps::new("tabler-circle-dot"),
                vertical_nav_unpinned: IconProps::new("tabler-circle"),
                section_title_placeholder: IconProps::new("tabler-minus"),
            },
        }
    }
}

lazy_static::lazy_static! {
    /// Process-wide layout configuration consumed by the host renderer.
    pub static ref LAYOUT_CONFIG: LayoutConfig = LayoutConfig::default();
}
