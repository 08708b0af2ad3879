use serde::Serialize;
use ts_rs::TS;
use utoipa::ToSchema;

pub const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 640;

/// ToastPlacement
///
/// Where notification toasts are anchored. Derived from the viewport width the
/// client reports; the navigation resolver never sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ToastPlacement {
    TopCenter,
    TopRight,
}

impl ToastPlacement {
    pub fn for_viewport(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px < breakpoint_px {
            ToastPlacement::TopCenter
        } else {
            ToastPlacement::TopRight
        }
    }
}
