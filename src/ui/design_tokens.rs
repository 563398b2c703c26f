// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the landing page.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Caption fade levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border / Radius / Shadow**: Toast chrome

## Examples

```
use coming_soon::ui::design_tokens::{opacity, palette};
use iced::Color;

let faded = Color {
    a: opacity::CAPTION,
    ..palette::WHITE
};
assert!(faded.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.957, 0.263, 0.212);
    pub const SUCCESS_500: Color = Color::from_rgb(0.298, 0.686, 0.314);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Resting opacity of the progress caption.
    pub const CAPTION: f32 = 0.8;
    /// Toast background.
    pub const SURFACE: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const INPUT_WIDTH: f32 = 280.0;
    pub const TOAST_WIDTH: f32 = 360.0;
    /// Vertical slide of a status message while it fades.
    pub const MESSAGE_SLIDE: f32 = 10.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 48.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const BODY: f32 = 15.0;
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border, Radius, Shadow
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::CAPTION > 0.0 && opacity::CAPTION < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
