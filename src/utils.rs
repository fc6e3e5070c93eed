use clipboard::{ClipboardContext, ClipboardProvider};

pub fn move_window(start: usize, height: usize, new_index: usize) -> Option<usize> {
    if height == 0 {
        return None;
    }

    let mut new_start = start;

    if new_index < start {
        new_start = new_index;
    } else if new_index > start + (height.saturating_sub(1)) {
        new_start = new_index - (height.saturating_sub(1));
    }

    Some(new_start)
}

pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.into()
    } else {
        let mut clipped: String = text.chars().take(max.saturating_sub(3)).collect();
        clipped.push_str("...");
        clipped
    }
}

pub fn save_to_clipboard(text: &str) -> Result<String, String> {
    if text.is_empty() {
        return Err("nothing to copy".into());
    }

    let cb: Result<ClipboardContext, _> = ClipboardProvider::new().map_err(|e| format!("{}", e));
    let mut cb = cb?;

    match cb.set_contents(text.to_owned()) {
        Ok(_) => Ok(format!("copied \"{}\"", ellipsize(text, 32))),
        Err(e) => Err(format!("failed to copy to clipboard ({})", e)),
    }
}
