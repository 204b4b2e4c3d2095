//! Product definitions - what a target produces.
//!
//! A Product names the artifact a target builds. Aggregate and header-only
//! targets have no artifact, which is represented by an absent `path`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The kind of artifact a target produces.
///
/// Decoded from the reverse-DNS product type identifiers used by the IDE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "com.apple.product-type.application")]
    Application,
    #[serde(rename = "com.apple.product-type.application.on-demand-install-capable")]
    OnDemandInstallCapableApplication,
    #[serde(rename = "com.apple.product-type.application.messages")]
    MessagesApplication,
    #[serde(rename = "com.apple.product-type.application.watchapp")]
    WatchApp,
    #[serde(rename = "com.apple.product-type.application.watchapp2")]
    Watch2App,
    #[serde(rename = "com.apple.product-type.application.watchapp2-container")]
    Watch2AppContainer,
    #[serde(rename = "com.apple.product-type.framework")]
    Framework,
    #[serde(rename = "com.apple.product-type.framework.static")]
    StaticFramework,
    #[serde(rename = "com.apple.product-type.xcframework")]
    XcFramework,
    #[serde(rename = "com.apple.product-type.library.static")]
    StaticLibrary,
    #[serde(rename = "com.apple.product-type.library.dynamic")]
    DynamicLibrary,
    #[serde(rename = "com.apple.product-type.tool")]
    CommandLineTool,
    #[serde(rename = "com.apple.product-type.bundle")]
    Bundle,
    #[serde(rename = "com.apple.product-type.bundle.unit-test")]
    UnitTestBundle,
    #[serde(rename = "com.apple.product-type.bundle.ui-testing")]
    UiTestBundle,
    #[serde(rename = "com.apple.product-type.bundle.ocunit-test")]
    OcUnitTestBundle,
    #[serde(rename = "com.apple.product-type.app-extension")]
    AppExtension,
    #[serde(rename = "com.apple.product-type.app-extension.messages")]
    MessagesExtension,
    #[serde(rename = "com.apple.product-type.app-extension.messages-sticker-pack")]
    StickerPack,
    #[serde(rename = "com.apple.product-type.app-extension.intents-service")]
    IntentsServiceExtension,
    #[serde(rename = "com.apple.product-type.tv-app-extension")]
    TvExtension,
    #[serde(rename = "com.apple.product-type.watchkit-extension")]
    WatchExtension,
    #[serde(rename = "com.apple.product-type.watchkit2-extension")]
    Watch2Extension,
    #[serde(rename = "com.apple.product-type.xpc-service")]
    XpcService,
    #[serde(rename = "com.apple.product-type.instruments-package")]
    InstrumentsPackage,
    #[serde(rename = "com.apple.product-type.metal-library")]
    MetalLibrary,
    #[serde(rename = "com.apple.product-type.driver-extension")]
    DriverExtension,
    #[serde(rename = "com.apple.product-type.system-extension")]
    SystemExtension,
}

impl ProductType {
    /// The explicit file type of this product's file reference.
    pub fn file_type(&self) -> &'static str {
        match self {
            ProductType::Application
            | ProductType::OnDemandInstallCapableApplication
            | ProductType::MessagesApplication
            | ProductType::WatchApp
            | ProductType::Watch2App
            | ProductType::Watch2AppContainer => "wrapper.application",
            ProductType::Framework | ProductType::StaticFramework => "wrapper.framework",
            ProductType::XcFramework => "wrapper.xcframework",
            ProductType::StaticLibrary => "archive.ar",
            ProductType::DynamicLibrary => "compiled.mach-o.dylib",
            ProductType::CommandLineTool => "compiled.mach-o.executable",
            ProductType::Bundle
            | ProductType::UnitTestBundle
            | ProductType::UiTestBundle
            | ProductType::OcUnitTestBundle => "wrapper.cfbundle",
            ProductType::AppExtension
            | ProductType::MessagesExtension
            | ProductType::StickerPack
            | ProductType::IntentsServiceExtension
            | ProductType::TvExtension
            | ProductType::WatchExtension
            | ProductType::Watch2Extension => "wrapper.app-extension",
            ProductType::XpcService => "wrapper.xpc-service",
            ProductType::InstrumentsPackage => "com.apple.instruments.instrdst",
            ProductType::MetalLibrary => "archive.metal-library",
            ProductType::DriverExtension => "wrapper.driver-extension",
            ProductType::SystemExtension => "wrapper.system-extension",
        }
    }

    /// Check if this is a test bundle (the only kind that may have a test host).
    pub fn is_test_bundle(&self) -> bool {
        matches!(
            self,
            ProductType::UnitTestBundle | ProductType::UiTestBundle | ProductType::OcUnitTestBundle
        )
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductType::Application => "application",
            ProductType::OnDemandInstallCapableApplication => "on-demand-install-capable application",
            ProductType::MessagesApplication => "messages application",
            ProductType::WatchApp => "watch app",
            ProductType::Watch2App => "watchOS 2 app",
            ProductType::Watch2AppContainer => "watch app container",
            ProductType::Framework => "framework",
            ProductType::StaticFramework => "static framework",
            ProductType::XcFramework => "xcframework",
            ProductType::StaticLibrary => "static library",
            ProductType::DynamicLibrary => "dynamic library",
            ProductType::CommandLineTool => "command-line tool",
            ProductType::Bundle => "bundle",
            ProductType::UnitTestBundle => "unit test bundle",
            ProductType::UiTestBundle => "UI test bundle",
            ProductType::OcUnitTestBundle => "OCUnit test bundle",
            ProductType::AppExtension => "app extension",
            ProductType::MessagesExtension => "messages extension",
            ProductType::StickerPack => "sticker pack",
            ProductType::IntentsServiceExtension => "intents service extension",
            ProductType::TvExtension => "tv app extension",
            ProductType::WatchExtension | ProductType::Watch2Extension => "watchkit extension",
            ProductType::XpcService => "XPC service",
            ProductType::InstrumentsPackage => "instruments package",
            ProductType::MetalLibrary => "metal library",
            ProductType::DriverExtension => "driver extension",
            ProductType::SystemExtension => "system extension",
        };
        f.write_str(name)
    }
}

/// The artifact a target produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "type")]
    pub product_type: ProductType,

    pub name: String,

    /// Output path, absent when the target produces nothing
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Product {
    /// Create a product with an output path.
    pub fn new(product_type: ProductType, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Product {
            product_type,
            name: name.into(),
            path: Some(path.into()),
        }
    }

    /// Create a product without an artifact.
    pub fn without_artifact(product_type: ProductType, name: impl Into<String>) -> Self {
        Product {
            product_type,
            name: name.into(),
            path: None,
        }
    }

    /// Get the output path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
