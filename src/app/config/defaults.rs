// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration settings.

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Snapshot pixels per logical unit of the on-screen grid.
pub const DEFAULT_EXPORT_SCALE: f32 = 2.0;

/// Minimum snapshot scale.
pub const MIN_EXPORT_SCALE: f32 = 1.0;

/// Maximum snapshot scale.
pub const MAX_EXPORT_SCALE: f32 = 4.0;

// ==========================================================================
// Picker Defaults
// ==========================================================================

/// Whether the photo library source is offered.
pub const DEFAULT_LIBRARY_ENABLED: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_EXPORT_SCALE > 0.0);
    assert!(MIN_EXPORT_SCALE <= DEFAULT_EXPORT_SCALE);
    assert!(DEFAULT_EXPORT_SCALE <= MAX_EXPORT_SCALE);
};
