//! Cart commands.

use super::{CliError, FilePage, out};

/// Add one unit of a dish.
pub fn add(page: &mut FilePage, name: &str, price: &str, image: &str) {
    page.add_to_cart(name, price, image);
}

/// Print every line and the total.
pub fn list(page: &FilePage) {
    let view = page.cart_view();
    if view.items.is_empty() {
        out("Your cart is empty");
        return;
    }
    for item in &view.items {
        out(format_args!(
            "{:>3}  {:<30} {:>12}  x{}",
            item.index, item.name, item.price, item.quantity
        ));
    }
    out(format_args!("{} item(s), total {}", view.item_count, view.total));
}

/// Change the quantity of line `index` by `delta`.
pub fn update(page: &mut FilePage, index: usize, delta: i32) {
    page.update_quantity(index, delta);
}

/// Remove a line by index, or by dish name when `by_name` is set.
///
/// # Errors
///
/// Returns `CliError::InvalidIndex` if `target` is not a line index.
pub fn remove(page: &mut FilePage, target: &str, by_name: bool) -> Result<(), CliError> {
    if by_name {
        page.remove_by_name(target);
    } else {
        let index = target
            .parse()
            .map_err(|_| CliError::InvalidIndex(target.to_owned()))?;
        page.remove_from_cart(index);
    }
    Ok(())
}

/// Print the total.
pub fn total(page: &FilePage) {
    out(page.total());
}

/// Place the order.
pub fn checkout(page: &mut FilePage) {
    page.checkout();
}
