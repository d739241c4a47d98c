use crate::models::IconTarget;
use image::Rgb;

/// Toolbar blue behind the glyph (#1a73e8).
pub const BACKGROUND: Rgb<u8> = Rgb([0x1a, 0x73, 0xe8]);

/// Colour of the three URL bars.
pub const BAR_COLOR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Parameter indicator green (#34a853).
pub const ACCENT_COLOR: Rgb<u8> = Rgb([0x34, 0xa8, 0x53]);

/// Number of horizontal bars drawn on every icon.
pub const BAR_COUNT: u32 = 3;

/// Icon sizes shipped with the extension.
pub const ICON_SET: [IconTarget; 3] = [
    IconTarget { size: 16, file_name: "icon16.png" },
    IconTarget { size: 48, file_name: "icon48.png" },
    IconTarget { size: 128, file_name: "icon128.png" },
];
