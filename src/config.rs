use std::path::PathBuf;

/// Output format selected at configuration-parse time.
///
/// A static registry: every renderer the composition root can construct
/// has a variant here, so there is no construct-by-string at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// One human-readable line per event
    Print,
    /// KML map document
    Kml,
    /// Google-Charts heat-map URL
    Chart,
}

impl FormatKind {
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "print" => Ok(Self::Print),
            "kml" => Ok(Self::Kml),
            "chart" => Ok(Self::Chart),
            other => anyhow::bail!("unknown format {other:?} (expected print, kml, or chart)"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Kml => "kml",
            Self::Chart => "chart",
        }
    }

    /// Output file name used when several formats run in one scan.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Print => "events.txt",
            Self::Kml => "events.kml",
            Self::Chart => "chart.url",
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the GeoLite2-City database
    pub geoip_path: String,
    /// Active output formats, dispatch order = listed order
    pub formats: Vec<FormatKind>,
    /// Directory for per-format output files when several formats are active
    pub out_dir: PathBuf,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geoip_path: "GeoLite2-City.mmdb".to_string(),
            formats: vec![FormatKind::Chart],
            out_dir: PathBuf::from("."),
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let geoip_path = std::env::var("GEOSCAN_GEOIP_PATH")
        .unwrap_or_else(|_| "GeoLite2-City.mmdb".to_string());

    let formats = match std::env::var("GEOSCAN_FORMATS") {
        Ok(list) => list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(FormatKind::from_str)
            .collect::<anyhow::Result<Vec<_>>>()?,
        Err(_) => vec![FormatKind::Chart],
    };

    if formats.is_empty() {
        anyhow::bail!("GEOSCAN_FORMATS selected no formats");
    }

    let out_dir = std::env::var("GEOSCAN_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        geoip_path,
        formats,
        out_dir,
        debug,
    })
}
