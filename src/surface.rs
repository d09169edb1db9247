//! Write-side capability the motion controllers render through.
//!
//! Controllers never touch `web_sys` directly; the browser adapter
//! (`site::dom::WebSurface`) implements this for real elements and the
//! recording double below implements it for host tests.

pub trait Surface {
    /// Handle to one element. Cheap to clone.
    type Node: Clone;

    fn set_text(&self, node: &Self::Node, text: &str);
    /// Add (`on == true`) or remove a class.
    fn set_class(&self, node: &Self::Node, class: &str, on: bool);
    fn set_style(&self, node: &Self::Node, property: &str, value: &str);
    /// Smooth-scroll the viewport to `top` px.
    fn scroll_to(&self, top: f64);
}
