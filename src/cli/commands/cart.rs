use crate::cli::CartArgs;
use crate::models::Cart;

pub fn cmd_cart(args: &CartArgs) {
    let mut cart = Cart::demo();

    for id in &args.increment {
        cart.increment(*id);
    }
    for id in &args.decrement {
        cart.decrement(*id);
    }
    for id in &args.remove {
        cart.remove(*id);
    }
    if args.clear {
        cart.clear();
    }

    print_cart(&cart);
}

pub(super) fn print_cart(cart: &Cart) {
    println!("Shopping Cart ({} items)", cart.item_count());
    println!("{:-<70}", "");

    if cart.is_empty() {
        println!("Your cart is empty.");
    }

    for item in cart.items() {
        println!("#{} {}", item.id, item.name);
        println!(
            "  Part #: {} | ${:.2} x {} = ${:.2}",
            item.part_number,
            item.price,
            item.quantity,
            item.line_total()
        );
    }

    println!("{:-<70}", "");
    println!("Subtotal: ${:.2}", cart.subtotal());
    let shipping = cart.shipping();
    if shipping == 0.0 {
        println!("Shipping: FREE");
    } else {
        println!("Shipping: ${shipping:.2}");
    }
    println!("Total:    ${:.2}", cart.total());
}
