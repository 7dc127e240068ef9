use restomap_common::location::MapRegion;
use restomap_common::restaurant::RestaurantRecord;

/// The widgets one frame of the screen is drawn with.
///
/// Calls arrive in screen order: `begin_frame`, `search_input`, either `map` or
/// `loading_indicator`, then one `separator` between consecutive list entries,
/// and `end_frame`.
pub trait ScreenSurface {
    fn begin_frame(&mut self) {}
    fn search_input(&mut self, query: &str, placeholder: &str);
    /// Shows the map viewport at its initial region.
    fn map(&mut self, region: &MapRegion);
    fn loading_indicator(&mut self);
    fn separator(&mut self, height: u16);
    fn end_frame(&mut self, _item_count: usize) {}
}

/// Renders one restaurant entry of the list. The record is passed whole.
pub trait DetailRenderer: Send + Sync {
    fn render(&self, record: &RestaurantRecord, index: usize);
}
