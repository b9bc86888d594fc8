use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub panel_background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub caption_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x16, 0x16, 0x1E),
            panel_background: Color32::from_rgb(0x1F, 0x1F, 0x2B),
            foreground: Color32::from_rgb(0xC8, 0xC8, 0xD0),
            heading_color: Color32::WHITE,
            accent: Color32::from_rgb(0x52, 0x94, 0xE2),
            error: Color32::from_rgb(0xE2, 0x6C, 0x5A),
            h1_size: 34.0,
            h2_size: 26.0,
            h3_size: 20.0,
            body_size: 15.0,
            caption_size: 12.5,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xFA, 0xFA, 0xF7),
            panel_background: Color32::WHITE,
            foreground: Color32::from_rgb(0x2A, 0x2A, 0x35),
            heading_color: Color32::from_rgb(0x16, 0x21, 0x3E),
            accent: Color32::from_rgb(0x0F, 0x34, 0x60),
            error: Color32::from_rgb(0xB3, 0x2D, 0x1E),
            h1_size: 34.0,
            h2_size: 26.0,
            h3_size: 20.0,
            body_size: 15.0,
            caption_size: 12.5,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (opacity * 255.0) as u8)
    }
}
