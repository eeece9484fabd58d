use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::OnceLock;

use image::RgbImage;
use tracing::debug;

/// Abstract blend operation an external engine object must provide
///
/// Returning `None` means the engine declines this request and the caller
/// should fall back to the cross-dissolve for that alpha.
pub trait MorphEngine: Send + Sync {
    fn blend(&self, source: &RgbImage, target: &RgbImage, alpha: f32) -> Option<RgbImage>;
}

/// Free-function capability shape
pub type BlendFn = fn(&RgbImage, &RgbImage, f32) -> Option<RgbImage>;

/// Constructor for the class-based capability shape; may fail
pub type EngineFactory = fn() -> anyhow::Result<Box<dyn MorphEngine>>;

/// The capability shapes a host may install, probed in declaration order
#[derive(Default)]
pub struct EngineProviders {
    /// Instantiable engine object exposing a blend method
    pub factory: Option<EngineFactory>,
    /// Free blend function under the primary name
    pub blend_fn: Option<BlendFn>,
    /// Free blend function under the alternate name
    pub alt_blend_fn: Option<BlendFn>,
}

static INSTALLED: OnceLock<EngineProviders> = OnceLock::new();

/// Install the external morph capability for this process
///
/// Must happen before the first [`EngineHandle::discover`] call. Returns
/// false when providers were already installed.
pub fn install_providers(providers: EngineProviders) -> bool {
    INSTALLED.set(providers).is_ok()
}

/// Which capability shape discovery bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMode {
    Class,
    Function,
    AltFunction,
    Unavailable,
}

impl std::fmt::Display for EngineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class => write!(f, "class-based"),
            Self::Function => write!(f, "function-based"),
            Self::AltFunction => write!(f, "alternate-function-based"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

enum Backend {
    Engine(Box<dyn MorphEngine>),
    Function(BlendFn),
    None,
}

/// Normalized handle over whatever morph capability the process has
///
/// Immutable after discovery and shared read-only across all pairs; the
/// capability is probed exactly once, never per pair.
pub struct EngineHandle {
    mode: EngineMode,
    backend: Backend,
}

impl EngineHandle {
    /// Probe the installed providers and bind the first shape that works
    ///
    /// Any failure during detection, including a panicking constructor,
    /// degrades to the next shape and ultimately to `Unavailable`. Discovery
    /// itself never aborts the batch.
    pub fn discover() -> Self {
        match INSTALLED.get() {
            Some(providers) => Self::from_providers(providers),
            None => Self::unavailable(),
        }
    }

    /// Bind against an explicit provider set (used by discovery and tests)
    pub fn from_providers(providers: &EngineProviders) -> Self {
        if let Some(factory) = providers.factory {
            match catch_unwind(factory) {
                Ok(Ok(engine)) => {
                    debug!("morph engine bound: class-based");
                    return Self {
                        mode: EngineMode::Class,
                        backend: Backend::Engine(engine),
                    };
                }
                Ok(Err(err)) => debug!("morph engine construction failed: {err}"),
                Err(_) => debug!("morph engine construction panicked"),
            }
        }

        if let Some(blend_fn) = providers.blend_fn {
            debug!("morph engine bound: function-based");
            return Self {
                mode: EngineMode::Function,
                backend: Backend::Function(blend_fn),
            };
        }

        if let Some(blend_fn) = providers.alt_blend_fn {
            debug!("morph engine bound: alternate-function-based");
            return Self {
                mode: EngineMode::AltFunction,
                backend: Backend::Function(blend_fn),
            };
        }

        Self::unavailable()
    }

    /// A handle with no capability; every blend returns `None`
    pub fn unavailable() -> Self {
        Self {
            mode: EngineMode::Unavailable,
            backend: Backend::None,
        }
    }

    pub fn mode(&self) -> EngineMode {
        self.mode
    }

    pub fn is_available(&self) -> bool {
        self.mode != EngineMode::Unavailable
    }

    /// Blend through the bound capability
    ///
    /// `None` signals the caller to use the fallback blender for this alpha.
    /// A panicking engine call is contained here and reported as `None`, so
    /// one misbehaving alpha never takes down the pair.
    pub fn blend(&self, source: &RgbImage, target: &RgbImage, alpha: f32) -> Option<RgbImage> {
        let outcome = match &self.backend {
            Backend::Engine(engine) => {
                catch_unwind(AssertUnwindSafe(|| engine.blend(source, target, alpha)))
            }
            Backend::Function(blend_fn) => {
                catch_unwind(AssertUnwindSafe(|| blend_fn(source, target, alpha)))
            }
            Backend::None => return None,
        };

        match outcome {
            Ok(result) => result,
            Err(_) => {
                debug!("morph engine panicked at alpha {alpha:.3}; falling back");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    struct EchoSource;

    impl MorphEngine for EchoSource {
        fn blend(&self, source: &RgbImage, _target: &RgbImage, _alpha: f32) -> Option<RgbImage> {
            Some(source.clone())
        }
    }

    fn sample() -> (RgbImage, RgbImage) {
        (
            RgbImage::from_pixel(2, 2, Rgb([255, 0, 0])),
            RgbImage::from_pixel(2, 2, Rgb([0, 0, 255])),
        )
    }

    #[test]
    fn test_unavailable_handle_declines_every_blend() {
        let handle = EngineHandle::unavailable();
        let (a, b) = sample();
        assert_eq!(handle.mode(), EngineMode::Unavailable);
        assert!(!handle.is_available());
        assert!(handle.blend(&a, &b, 0.5).is_none());
    }

    #[test]
    fn test_class_shape_wins_probe_order() {
        let providers = EngineProviders {
            factory: Some(|| Ok(Box::new(EchoSource))),
            blend_fn: Some(|_, _, _| None),
            alt_blend_fn: None,
        };
        let handle = EngineHandle::from_providers(&providers);
        assert_eq!(handle.mode(), EngineMode::Class);

        let (a, b) = sample();
        assert_eq!(handle.blend(&a, &b, 0.25).unwrap(), a);
    }

    #[test]
    fn test_failed_factory_degrades_to_function_shape() {
        let providers = EngineProviders {
            factory: Some(|| anyhow::bail!("no landmarks model on disk")),
            blend_fn: Some(|_, target, _| Some(target.clone())),
            alt_blend_fn: None,
        };
        let handle = EngineHandle::from_providers(&providers);
        assert_eq!(handle.mode(), EngineMode::Function);

        let (a, b) = sample();
        assert_eq!(handle.blend(&a, &b, 0.75).unwrap(), b);
    }

    #[test]
    fn test_panicking_factory_degrades_to_alternate_shape() {
        let providers = EngineProviders {
            factory: Some(|| panic!("bad engine state")),
            blend_fn: None,
            alt_blend_fn: Some(|source, _, _| Some(source.clone())),
        };
        let handle = EngineHandle::from_providers(&providers);
        assert_eq!(handle.mode(), EngineMode::AltFunction);
    }

    #[test]
    fn test_no_providers_means_unavailable() {
        let handle = EngineHandle::from_providers(&EngineProviders::default());
        assert_eq!(handle.mode(), EngineMode::Unavailable);
    }

    #[test]
    fn test_panicking_blend_is_contained() {
        let providers = EngineProviders {
            factory: None,
            blend_fn: Some(|_, _, _| panic!("engine bug on this alpha")),
            alt_blend_fn: None,
        };
        let handle = EngineHandle::from_providers(&providers);
        let (a, b) = sample();
        assert!(handle.blend(&a, &b, 0.5).is_none());
    }
}
