use crate::App;
use ratatui::Frame;

use festui::logic::layout as grid_layout;
use festui::CategoryFilter;

use super::{
    category_tabs, gallery_grid, header, layout, legend,
    lightbox::{self, LightboxView},
    status_bar, toast,
};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let vim_mode = app.model.ui.vim_mode;
    let lightbox_open = app.model.has_modal();

    let legend_height = legend::calculate_legend_height(size.width, vim_mode, lightbox_open);
    let layout_info = layout::calculate_layout(size, app.model.ui.show_banner, legend_height);

    header::render_header(
        f,
        layout_info.header_area,
        &app.model.site,
        &app.model.title,
        &app.model.subtitle,
        chrono::Local::now().naive_local(),
    );

    if let Some(banner_area) = layout_info.banner_area {
        header::render_banner(f, banner_area, &app.model.site);
    }

    category_tabs::render_category_tabs(
        f,
        layout_info.tabs_area,
        &app.model.tabs,
        app.model.active_tab_index(),
        &app.model.gallery.counts_by_category(),
        app.model.gallery.items().len(),
        app.model.gallery.mode(),
    );

    // Record grid geometry so cursor paging matches what is on screen
    let grid_area = layout_info.grid_area;
    app.model.ui.grid_columns = grid_layout::grid_columns(grid_area.width);
    app.model.ui.grid_rows = grid_layout::visible_rows(grid_area.height);
    app.model.ui.first_row = grid_layout::scroll_to_show(
        app.model.ui.grid_selection,
        app.model.ui.grid_columns,
        app.model.ui.grid_rows,
        app.model.ui.first_row,
    );

    let visible = app.model.gallery.visible_items();
    gallery_grid::render_gallery_grid(
        f,
        grid_area,
        &visible,
        app.model.gallery.categories(),
        app.model.ui.grid_selection,
        app.model.ui.first_row,
        app.model.ui.grid_columns,
    );

    let category_label = match app.model.gallery.active_category() {
        CategoryFilter::All => "All",
        CategoryFilter::Only(id) => app
            .model
            .tabs
            .iter()
            .find(|tab| &tab.filter == app.model.gallery.active_category())
            .map(|tab| tab.label.as_str())
            .unwrap_or(id.as_str()),
    };
    let cursor = app
        .model
        .ui
        .grid_selection
        .and_then(|idx| visible.get(idx).map(|item| (idx, item.display_caption())));

    legend::render_legend(f, layout_info.legend_area, vim_mode, lightbox_open);
    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        category_label,
        visible.len(),
        app.model.gallery.mode(),
        cursor,
        app.model.gallery.selected_position(),
    );

    if let Some(item) = app.model.gallery.selected() {
        let source = app.source_for(item).describe();
        let category = app
            .model
            .gallery
            .categories()
            .iter()
            .find(|c| c.id == item.category)
            .map(|c| c.name.as_str())
            .unwrap_or(item.category.as_str());
        let view = LightboxView {
            item,
            position: app.model.gallery.selected_position(),
            category,
            source: &source,
            previews_enabled: app.image_picker.is_some(),
            vim_mode,
        };
        lightbox::render_lightbox(f, &view, app.previews.get_mut(&item.id));
    }

    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
