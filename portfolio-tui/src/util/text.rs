//! 文本宽度处理

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断，超出部分以 `…` 结尾
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_text() {
        assert_eq!(truncate("img/a.jpg", 20), "img/a.jpg");
    }

    #[test]
    fn cuts_by_display_width() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        // 全角字符占两列
        assert_eq!(truncate("画廊画廊", 5), "画廊…");
    }
}
