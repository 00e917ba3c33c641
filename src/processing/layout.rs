/// Largest size with the source aspect ratio that fits inside `box_w`×`box_h`.
pub fn fit_within(box_w: u32, box_h: u32, src_w: u32, src_h: u32) -> (u32, u32) {
    let iw = src_w.max(1) as f32;
    let ih = src_h.max(1) as f32;
    let bw = box_w.max(1) as f32;
    let bh = box_h.max(1) as f32;
    let scale = (bw / iw).min(bh / ih);
    let scale = if scale.is_finite() { scale } else { 1.0 };
    let w = (iw * scale).round().clamp(1.0, bw);
    let h = (ih * scale).round().clamp(1.0, bh);
    (w as u32, h as u32)
}

/// Centered region of a `src_w`×`src_h` source with the aspect ratio of `box_w`×`box_h`.
///
/// Returns `(x, y, w, h)`; the region always lies inside the source.
pub fn cover_crop(box_w: u32, box_h: u32, src_w: u32, src_h: u32) -> (u32, u32, u32, u32) {
    let sw = u64::from(src_w.max(1));
    let sh = u64::from(src_h.max(1));
    let bw = u64::from(box_w.max(1));
    let bh = u64::from(box_h.max(1));
    let (w, h) = if sw * bh > sh * bw {
        // source is wider than the box: trim the sides
        (((sh * bw + bh / 2) / bh).clamp(1, sw), sh)
    } else {
        (sw, ((sw * bh + bw / 2) / bw).clamp(1, sh))
    };
    let (w, h) = (w as u32, h as u32);
    let (x, y) = center_offset(w, h, src_w.max(1), src_h.max(1));
    (x, y, w, h)
}

pub fn center_offset(inner_w: u32, inner_h: u32, outer_w: u32, outer_h: u32) -> (u32, u32) {
    let ox = outer_w.saturating_sub(inner_w) / 2;
    let oy = outer_h.saturating_sub(inner_h) / 2;
    (ox, oy)
}
