//! Font loading utilities for font files and the system font database.

use std::path::Path;

use fontdb::{Database, Family, Query};
use poster_type_config::{FontEntry, WeightClass};

use super::fallbacks::FALLBACK_FAMILIES;
use super::types::FontData;
use crate::descriptor::{FontChain, FontDescriptor};
use crate::error::FontError;

/// Read and parse one face of a font file.
///
/// # Errors
/// `FontError::Read` when the file cannot be read, `FontError::InvalidData`
/// when the bytes do not contain the requested face.
pub fn load_font_file(path: &Path, face_index: u32) -> Result<FontData, FontError> {
    let data = std::fs::read(path).map_err(|source| FontError::Read {
        path: path.display().to_string(),
        source,
    })?;
    FontData::new_with_index(data, face_index).ok_or_else(|| FontError::InvalidData {
        path: path.display().to_string(),
        face_index,
    })
}

/// Resolve a system font family to a file-backed descriptor.
///
/// The descriptor's alias is the family name followed by the weight class
/// (`"Noto Sans Bold"`), so one family resolved for several weights yields
/// one alias per file.
///
/// # Errors
/// `FontError::FamilyNotFound` when nothing matches, `FontError::NotFileBacked`
/// when the match was loaded from memory rather than a file.
pub fn resolve_family(
    db: &Database,
    family_name: &str,
    weight: WeightClass,
) -> Result<FontDescriptor, FontError> {
    let query = Query {
        families: &[Family::Name(family_name)],
        weight: fontdb::Weight(weight.numeric_weight()),
        style: fontdb::Style::Normal,
        ..Query::default()
    };

    let id = db
        .query(&query)
        .ok_or_else(|| FontError::FamilyNotFound(family_name.to_string()))?;
    let face = db
        .face(id)
        .ok_or_else(|| FontError::FamilyNotFound(family_name.to_string()))?;

    match &face.source {
        fontdb::Source::File(path) => {
            let alias = format!("{} {}", family_name, weight.display_name());
            Ok(FontDescriptor::new(path.clone(), alias).with_face_index(face.index))
        }
        _ => Err(FontError::NotFileBacked(family_name.to_string())),
    }
}

/// Turn one configured entry into a descriptor.
///
/// A path is taken as is, without touching the disk; a family goes through
/// the font database.
pub fn resolve_entry(
    db: &Database,
    entry: &FontEntry,
    weight: WeightClass,
) -> Result<FontDescriptor, FontError> {
    if let Some(path) = &entry.path {
        let alias = entry
            .display_alias()
            .unwrap_or_else(|| path.display().to_string());
        return Ok(FontDescriptor::new(path.clone(), alias).with_face_index(entry.face_index));
    }
    let family = entry
        .family
        .as_deref()
        .ok_or_else(|| FontError::FamilyNotFound(String::new()))?;
    let descriptor = resolve_family(db, family, weight)?;
    Ok(match &entry.alias {
        Some(alias) => FontDescriptor::new(descriptor.path(), alias.clone())
            .with_face_index(descriptor.face_index()),
        None => descriptor,
    })
}

/// Build the fallback chain for a weight class.
///
/// Configured entries that cannot be resolved are skipped with a warning.
/// An empty configuration falls back to [`FALLBACK_FAMILIES`], keeping only
/// the families installed on this system.
pub fn build_chain(db: &Database, entries: &[FontEntry], weight: WeightClass) -> FontChain {
    let mut chain = FontChain::default();

    if entries.is_empty() {
        for family_name in FALLBACK_FAMILIES {
            match resolve_family(db, family_name, weight) {
                Ok(descriptor) => {
                    log::debug!("Added fallback font: {}", descriptor);
                    chain.push(descriptor);
                }
                Err(e) => log::trace!("Skipping fallback family: {}", e),
            }
        }
    } else {
        for entry in entries {
            match resolve_entry(db, entry, weight) {
                Ok(descriptor) => {
                    log::debug!("Added configured font: {}", descriptor);
                    chain.push(descriptor);
                }
                Err(e) => log::warn!("Skipping font entry {:?}: {}", entry, e),
            }
        }
    }

    log::info!(
        "{} font chain has {} fonts",
        weight.display_name(),
        chain.len()
    );
    chain
}
