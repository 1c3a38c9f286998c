//! Native Windows message box.
//!
//! The only `unsafe` in the crate is the `MessageBoxW` FFI call below.

#![cfg(target_os = "windows")]

use windows::Win32::UI::WindowsAndMessaging::{MB_OK, MessageBoxW};
use windows::core::PCWSTR;

use crate::ports::{NOTIFICATION_TITLE, Notifier};

/// Shows each notification as a modal `MB_OK` message box.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxNotifier;

impl MessageBoxNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for MessageBoxNotifier {
    fn notify(&mut self, message: &str) {
        let text = to_wide(message);
        let caption = to_wide(NOTIFICATION_TITLE);
        // SAFETY: both buffers are NUL-terminated UTF-16 and outlive the call,
        // which returns only after the box is dismissed.
        unsafe {
            let _ = MessageBoxW(None, PCWSTR(text.as_ptr()), PCWSTR(caption.as_ptr()), MB_OK);
        }
    }
}

fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
