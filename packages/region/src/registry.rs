//! The five Rio de Janeiro settlements shipped with the binary.
//!
//! Region definitions live in `regions/*.toml` and are compiled in, so the
//! default catalog needs no files at runtime. `REGION_TOMLS` lists them
//! in the order the dashboard shows them.

use landguard_region_models::Region;

use crate::CatalogError;

/// Number of built-in regions. Enforced by a test.
#[cfg(test)]
const EXPECTED_REGION_COUNT: usize = 5;

/// Embedded TOML region definitions.
const REGION_TOMLS: &[(&str, &str)] = &[
    ("rocinha", include_str!("../regions/rocinha.toml")),
    ("vidigal", include_str!("../regions/vidigal.toml")),
    (
        "complexo_do_alemao",
        include_str!("../regions/complexo_do_alemao.toml"),
    ),
    ("mare", include_str!("../regions/mare.toml")),
    ("cidade_de_deus", include_str!("../regions/cidade_de_deus.toml")),
];

/// Parses every embedded region definition, in registry order.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] naming the first file that fails to
/// parse. Structural validation happens in
/// [`RegionCatalog::new`](crate::RegionCatalog::new).
pub fn builtin_regions() -> Result<Vec<Region>, CatalogError> {
    REGION_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str).map_err(|e| CatalogError::Parse {
                source_name: format!("{name}.toml"),
                message: e.to_string(),
            })
        })
        .collect()
}
