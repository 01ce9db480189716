//! Material catalog and web-material resolution.
//!
//! The catalog is an immutable table built once at startup: the 30W fiber
//! laser settings for every material and finish we offer, plus the mapping
//! from the storefront's material identifiers to catalog entries. Every
//! setting and every mapping is validated at construction; a lookup miss at
//! request time is a configuration defect and is never substituted with a
//! default.

use crate::model::{CutMode, CutSetting, Material, MaterialEntry};
use labelkit_core::{ConfigurationError, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Mapping target for one storefront material identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebMaterialMapping {
    /// Catalog material name.
    pub material: String,
    /// Finish entry description within that material.
    pub entry: String,
}

/// Immutable registry of materials and storefront mappings.
///
/// Read-only after construction; safe to share across request handlers
/// without locking.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    web_mappings: BTreeMap<String, WebMaterialMapping>,
}

impl MaterialCatalog {
    /// Builds a catalog from a material table and storefront mappings,
    /// validating every cut setting and every mapping target.
    pub fn new(
        materials: Vec<Material>,
        web_mappings: BTreeMap<String, WebMaterialMapping>,
    ) -> Result<Self> {
        for material in &materials {
            if material.entries.is_empty() {
                return Err(ConfigurationError::EmptyMaterial {
                    material: material.name.clone(),
                }
                .into());
            }
            for entry in &material.entries {
                entry.settings.validate().map_err(|reason| {
                    Error::from(ConfigurationError::InvalidCutSetting {
                        material: material.name.clone(),
                        entry: entry.description.clone(),
                        reason,
                    })
                })?;
            }
        }

        let catalog = Self {
            materials,
            web_mappings,
        };

        // Every storefront id must land on a real entry before we accept
        // the table.
        for mapping in catalog.web_mappings.values() {
            catalog.lookup(&mapping.material, Some(&mapping.entry))?;
        }

        Ok(catalog)
    }

    /// The built-in 30W fiber laser library.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_materials(), builtin_web_mappings())
    }

    /// All materials in the catalog.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// All storefront material identifiers, in sorted order.
    pub fn web_material_ids(&self) -> impl Iterator<Item = &str> {
        self.web_mappings.keys().map(String::as_str)
    }

    /// Finds a finish entry by material name and optional description,
    /// both case-insensitive. Without a description the material's first
    /// entry is returned.
    pub fn entry(
        &self,
        material_name: &str,
        entry_description: Option<&str>,
    ) -> Result<&MaterialEntry> {
        let material = self
            .materials
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(material_name))
            .ok_or_else(|| {
                warn!(material = material_name, "material lookup miss");
                Error::from(ConfigurationError::MaterialNotFound {
                    material: material_name.to_string(),
                })
            })?;

        match entry_description {
            Some(description) => material
                .entries
                .iter()
                .find(|e| e.description.eq_ignore_ascii_case(description))
                .ok_or_else(|| {
                    warn!(
                        material = material_name,
                        entry = description,
                        "material entry lookup miss"
                    );
                    Error::from(ConfigurationError::EntryNotFound {
                        material: material.name.clone(),
                        entry: description.to_string(),
                    })
                }),
            // Constructor guarantees at least one entry.
            None => material.entries.first().ok_or_else(|| {
                Error::from(ConfigurationError::EmptyMaterial {
                    material: material.name.clone(),
                })
            }),
        }
    }

    /// Cut parameters for a material name and optional finish description.
    pub fn lookup(
        &self,
        material_name: &str,
        entry_description: Option<&str>,
    ) -> Result<&CutSetting> {
        self.entry(material_name, entry_description)
            .map(|entry| &entry.settings)
    }

    /// Cut parameters for a storefront material identifier.
    pub fn resolve_for_web_material(&self, web_material_id: &str) -> Result<&CutSetting> {
        let mapping = self.web_mappings.get(web_material_id).ok_or_else(|| {
            warn!(web_material_id, "unmapped web material");
            Error::from(ConfigurationError::UnmappedWebMaterial {
                web_material_id: web_material_id.to_string(),
            })
        })?;
        self.lookup(&mapping.material, Some(&mapping.entry))
    }
}

/// 45-degree cross-hatched scan, the library's most common shape.
fn scan(min_power: f64, max_power: f64, speed: f64, frequency: u32, interval: f64) -> CutSetting {
    CutSetting {
        mode: CutMode::Scan,
        min_power: Some(min_power),
        max_power,
        speed,
        frequency: Some(frequency),
        num_passes: None,
        interval: Some(interval),
        angle: Some(45.0),
        cross_hatch: true,
        overscan: None,
        dpi: None,
        dither_mode: None,
    }
}

/// Jarvis-dithered photo pass.
fn photo(
    min_power: Option<f64>,
    max_power: f64,
    speed: f64,
    frequency: u32,
    interval: f64,
    dpi: u32,
) -> CutSetting {
    CutSetting {
        mode: CutMode::Image,
        min_power,
        max_power,
        speed,
        frequency: Some(frequency),
        num_passes: Some(2),
        interval: Some(interval),
        angle: None,
        cross_hatch: false,
        overscan: None,
        dpi: Some(dpi),
        dither_mode: Some("jarvis".to_string()),
    }
}

fn entry(description: &str, sub_category: &str, settings: CutSetting) -> MaterialEntry {
    MaterialEntry {
        description: description.to_string(),
        sub_category: sub_category.to_string(),
        thickness: None,
        settings,
    }
}

fn material(name: &str, entries: Vec<MaterialEntry>) -> Material {
    Material {
        name: name.to_string(),
        entries,
    }
}

/// The parsed 30W 150x150 fiber library.
fn builtin_materials() -> Vec<Material> {
    vec![
        material(
            "Aluminum Anodized",
            vec![
                entry("Photo Quality", "Photo", photo(None, 27.0, 2550.0, 45000, 0.0758, 335)),
                entry("Satin Black", "Business Cards", scan(5.0, 53.0, 2550.0, 45000, 0.025)),
                entry("Shiny Colors", "Business Cards", scan(5.0, 80.0, 5050.0, 45000, 0.025)),
            ],
        ),
        material(
            "Aluminum",
            vec![
                entry("Engrave", "Default", scan(65.0, 75.0, 1000.0, 25000, 0.025)),
                entry("Luminous Finish", "Default", scan(35.0, 41.0, 750.0, 45000, 0.025)),
                entry(
                    "Deep",
                    "Default",
                    CutSetting {
                        num_passes: Some(3),
                        ..scan(65.0, 100.0, 301.0, 30000, 0.015)
                    },
                ),
                entry(
                    "Photo Quality",
                    "Photo",
                    photo(Some(23.0), 46.0, 240.0, 45000, 0.0806, 315),
                ),
            ],
        ),
        material(
            "Stainless Steel",
            vec![
                entry(
                    "Engrave",
                    "Default",
                    CutSetting {
                        num_passes: Some(5),
                        ..scan(35.0, 100.0, 632.0, 45000, 0.025)
                    },
                ),
                entry("Black Markings", "Default", scan(35.0, 100.0, 99.0, 40000, 0.015)),
                entry("Luminous Finish", "Default", scan(35.0, 75.0, 1550.0, 45000, 0.025)),
            ],
        ),
        material(
            "Brass",
            vec![
                entry("Luminous Finish", "Default", scan(35.0, 75.0, 1480.0, 50000, 0.025)),
                entry(
                    "Black Markings",
                    "Default",
                    CutSetting {
                        num_passes: Some(2),
                        ..scan(35.0, 100.0, 198.0, 45000, 0.015)
                    },
                ),
                entry(
                    "Engrave",
                    "Default",
                    CutSetting {
                        num_passes: Some(5),
                        ..scan(35.0, 100.0, 632.0, 50000, 0.025)
                    },
                ),
                entry(
                    "Deep",
                    "Default",
                    CutSetting {
                        num_passes: Some(4),
                        ..scan(35.0, 100.0, 192.0, 45000, 0.025)
                    },
                ),
            ],
        ),
        material(
            "Copper",
            vec![
                entry(
                    "Engrave",
                    "Default",
                    CutSetting {
                        num_passes: Some(2),
                        ..scan(35.0, 100.0, 156.0, 30000, 0.01)
                    },
                ),
                entry("Black Markings", "Default", scan(35.0, 100.0, 99.0, 40000, 0.01)),
                entry("Luminous Markings", "Default", scan(35.0, 80.0, 1550.0, 45000, 0.025)),
            ],
        ),
        material(
            "ABS Plastic",
            vec![
                entry(
                    "Luminous Marking",
                    "Black ABS",
                    CutSetting {
                        mode: CutMode::Scan,
                        min_power: Some(11.0),
                        max_power: 23.0,
                        speed: 2000.0,
                        frequency: None,
                        num_passes: None,
                        interval: Some(0.06),
                        angle: Some(90.0),
                        cross_hatch: true,
                        overscan: None,
                        dpi: None,
                        dither_mode: None,
                    },
                ),
                entry(
                    "Dark Markings",
                    "White ABS",
                    CutSetting {
                        mode: CutMode::Scan,
                        min_power: None,
                        max_power: 40.0,
                        speed: 1666.67,
                        frequency: None,
                        num_passes: Some(3),
                        interval: Some(0.06),
                        angle: None,
                        cross_hatch: false,
                        overscan: None,
                        dpi: None,
                        dither_mode: None,
                    },
                ),
            ],
        ),
        material(
            "Leather",
            vec![
                entry("Light Engrave", "Default", scan(11.0, 35.0, 500.0, 25000, 0.06)),
                entry("Dark Engrave", "Default", scan(11.0, 65.0, 300.0, 30000, 0.06)),
            ],
        ),
        material(
            "Wood",
            vec![
                entry("Light Engrave", "Default", scan(11.0, 30.0, 500.0, 25000, 0.08)),
                entry("Dark Engrave", "Default", scan(11.0, 55.0, 300.0, 30000, 0.06)),
            ],
        ),
        material(
            "Slate",
            vec![entry(
                "White Markings",
                "Default",
                CutSetting {
                    num_passes: Some(2),
                    ..scan(35.0, 100.0, 800.0, 35000, 0.025)
                },
            )],
        ),
        material(
            "Ceramic Coasters",
            vec![entry(
                "White Markings",
                "Black",
                CutSetting {
                    num_passes: Some(2),
                    ..scan(16.0, 96.0, 1050.0, 35000, 0.025)
                },
            )],
        ),
        material(
            "Powder Coat",
            vec![entry("Remove Coating", "Default", scan(11.0, 91.0, 400.0, 45000, 0.01))],
        ),
        material(
            "Cerakote",
            vec![entry("Polish", "Default", scan(11.0, 91.0, 400.0, 45000, 0.01))],
        ),
    ]
}

/// Storefront material id -> catalog entry.
fn builtin_web_mappings() -> BTreeMap<String, WebMaterialMapping> {
    let map = |id: &str, material: &str, entry: &str| {
        (
            id.to_string(),
            WebMaterialMapping {
                material: material.to_string(),
                entry: entry.to_string(),
            },
        )
    };

    BTreeMap::from([
        map("anodized-aluminum-thin", "Aluminum Anodized", "Satin Black"),
        map("anodized-aluminum-thick", "Aluminum Anodized", "Satin Black"),
        map("anodized-aluminum-black", "Aluminum Anodized", "Satin Black"),
        map("anodized-aluminum-color", "Aluminum Anodized", "Shiny Colors"),
        map("stainless-steel", "Stainless Steel", "Engrave"),
        map("brass", "Brass", "Engrave"),
        map("copper", "Copper", "Engrave"),
        map("abs-plastic", "ABS Plastic", "Luminous Marking"),
        map("abs-plastic-white", "ABS Plastic", "Dark Markings"),
        map("leather", "Leather", "Dark Engrave"),
        map("wood", "Wood", "Dark Engrave"),
        map("slate", "Slate", "White Markings"),
        map("ceramic", "Ceramic Coasters", "White Markings"),
        map("powder-coat", "Powder Coat", "Remove Coating"),
    ])
}
