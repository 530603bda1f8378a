//! Application components for the single-page storefront.

use leptos::ev;
use leptos::prelude::*;

use thrift_commerce::prelude::*;

use crate::catalog::{tags_for, vintage_catalog};
use crate::storage::{open_store, StoreHandle};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    let catalog = StoredValue::new(vintage_catalog());
    // The session owns the cart and its storage handle; the signal mirrors
    // the cart so the view can react to it.
    let session = StoredValue::new_local(CartSession::restore(open_store()));
    let cart = RwSignal::new(session.with_value(|s| s.cart().clone()));

    // UI state
    let search = RwSignal::new(String::new());
    let selected_category = RwSignal::new(String::new());
    let selected_product = RwSignal::new(None::<Product>);
    let selected_size = RwSignal::new(String::new());
    let mobile_cart_open = RwSignal::new(false);
    let checkout_notice = RwSignal::new(false);

    // Every cart mutation funnels through the session, which snapshots to
    // storage; the mirror signal then re-renders the panel.
    let apply = move |op: &mut dyn FnMut(&mut CartSession<StoreHandle>)| {
        session.update_value(|s| op(s));
        cart.set(session.with_value(|s| s.cart().clone()));
    };

    let results = Memo::new(move |_| {
        let query = BrowseQuery::new()
            .with_text(search.get())
            .with_category(selected_category.get());
        catalog.with_value(|c| c.browse(&query))
    });

    // Escape dismisses the modal and the mobile cart overlay.
    let escape = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            selected_product.set(None);
            mobile_cart_open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <MarqueeHeader/>
        <header class="masthead">
            <h1>"BSS FASHION"</h1>
            <p class="muted">"Warm vintage, curated drops."</p>
            <button
                class="btn cart-toggle"
                on:click=move |_| mobile_cart_open.update(|open| *open = !*open)
            >
                "Cart (" {move || cart.get().item_count()} ")"
            </button>
        </header>

        <main class="shop">
            <section class="controls">
                <input
                    class="search"
                    type="search"
                    placeholder="Search vintage pieces..."
                    prop:value=search
                    on:input=move |event| search.set(event_target_value(&event))
                />
                <div class="chips">
                    <button
                        class="chip"
                        class:active=move || selected_category.get().is_empty()
                        on:click=move |_| selected_category.set(String::new())
                    >
                        "All"
                    </button>
                    {catalog.with_value(|c| {
                        c.categories()
                            .iter()
                            .map(|category| {
                                let name = category.name.clone();
                                let select = name.clone();
                                let active = name.clone();
                                view! {
                                    <button
                                        class="chip"
                                        class:active=move || selected_category.get() == active
                                        on:click=move |_| selected_category.set(select.clone())
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect_view()
                    })}
                </div>
                <div class="muted">
                    {move || {
                        let shown = results.get().product_count();
                        let total = catalog.with_value(|c| c.product_count());
                        format!("{shown} of {total} pieces")
                    }}
                </div>
            </section>

            <div class="layout">
                <section class="racks">
                    {move || {
                        let found = results.get();
                        if found.is_empty() {
                            view! {
                                <div class="empty">
                                    <strong>"Nothing on the racks matches."</strong>
                                    <p class="muted">"Try a different search or category."</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            found
                                .categories
                                .into_iter()
                                .map(|category| {
                                    view! { <Rack category selected_product selected_size/> }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </section>

                <aside class="cart-panel" class:open=mobile_cart_open>
                    <div class="cart-head">
                        <h3>"Cart"</h3>
                        <div class="muted">
                            {move || {
                                let count = cart.get().item_count();
                                format!("{count} item{}", if count == 1 { "" } else { "s" })
                            }}
                        </div>
                    </div>
                    {move || {
                        let current = cart.get();
                        if current.is_empty() {
                            view! {
                                <div class="empty">
                                    <strong>"Your cart is empty"</strong>
                                    <p class="muted">"Add a piece you love, vintage goes fast."</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            let lines = current.items().to_vec();
                            view! {
                                <div class="cart-list">
                                    {lines
                                        .into_iter()
                                        .map(|line| {
                                            let id = line.product.id;
                                            let size = line.selected_size.clone();
                                            let qty = line.quantity;
                                            let label = match &line.selected_size {
                                                Some(size) => {
                                                    format!("{}, {size}", line.product.category)
                                                }
                                                None => line.product.category.clone(),
                                            };
                                            let each = line.product.price.display();
                                            let line_total = line.line_total().display();
                                            let dec = {
                                                let size = size.clone();
                                                move |_| {
                                                    apply(&mut |s| {
                                                        s.update_quantity(id, size.as_deref(), qty - 1);
                                                    })
                                                }
                                            };
                                            let inc = {
                                                let size = size.clone();
                                                move |_| {
                                                    apply(&mut |s| {
                                                        s.update_quantity(id, size.as_deref(), qty + 1);
                                                    })
                                                }
                                            };
                                            let remove = {
                                                let size = size.clone();
                                                move |_| {
                                                    apply(&mut |s| {
                                                        s.remove(id, size.as_deref());
                                                    })
                                                }
                                            };
                                            view! {
                                                <div class="cart-item">
                                                    <img
                                                        src=line.product.image.clone()
                                                        alt=line.product.name.clone()
                                                    />
                                                    <div class="cart-meta">
                                                        <div class="cart-name">{label}</div>
                                                        <div class="muted">{each} " each"</div>
                                                        <div class="qty-row">
                                                            <button
                                                                class="qty-btn"
                                                                aria-label="Decrease quantity"
                                                                on:click=dec
                                                            >
                                                                "\u{2212}"
                                                            </button>
                                                            <span class="qty">{qty}</span>
                                                            <button
                                                                class="qty-btn"
                                                                aria-label="Increase quantity"
                                                                on:click=inc
                                                            >
                                                                "+"
                                                            </button>
                                                        </div>
                                                    </div>
                                                    <div class="cart-right">
                                                        <div class="line-total">{line_total}</div>
                                                        <button class="remove" on:click=remove>
                                                            "Remove"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="total-row">
                                    <span>"Total"</span>
                                    <span>{current.total().display()}</span>
                                </div>
                                <button
                                    class="btn primary checkout"
                                    on:click=move |_| checkout_notice.set(true)
                                >
                                    "Checkout"
                                </button>
                                {move || {
                                    checkout_notice.get().then(|| {
                                        view! {
                                            <p class="notice">"Checkout coming soon \u{2728}"</p>
                                        }
                                    })
                                }}
                                <button class="link clear" on:click=move |_| apply(&mut |s| s.clear())>
                                    "Clear cart"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </aside>
            </div>
        </main>

        {move || {
            selected_product
                .get()
                .map(|product| {
                    let needs_size = product.has_sizes();
                    let sizes = product.sizes.clone().unwrap_or_default();
                    let add_product = product.clone();
                    let confirm = move |_| {
                        let size = selected_size.get_untracked();
                        let size = (!size.is_empty()).then_some(size);
                        apply(&mut |s| s.add(&add_product, size.as_deref()));
                        selected_product.set(None);
                        selected_size.set(String::new());
                    };
                    view! {
                        <div class="overlay" on:click=move |_| selected_product.set(None)>
                            <div class="modal" on:click=|event| event.stop_propagation()>
                                <img src=product.image.clone() alt=product.name.clone()/>
                                <h3>{product.name.clone()}</h3>
                                {product
                                    .description
                                    .clone()
                                    .map(|copy| view! { <p class="muted">{copy}</p> })}
                                <div class="price">{product.price.display()}</div>
                                {needs_size
                                    .then(|| {
                                        view! {
                                            <div class="chips">
                                                {sizes
                                                    .iter()
                                                    .map(|size| {
                                                        let select = size.clone();
                                                        let active = size.clone();
                                                        let label = size.clone();
                                                        view! {
                                                            <button
                                                                class="chip"
                                                                class:active=move || selected_size.get() == active
                                                                on:click=move |_| selected_size.set(select.clone())
                                                            >
                                                                {label}
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })}
                                <button
                                    class="btn primary"
                                    disabled=move || needs_size && selected_size.get().is_empty()
                                    on:click=confirm
                                >
                                    "Add to cart"
                                </button>
                            </div>
                        </div>
                    }
                })
        }}
        <Footer/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn MarqueeHeader() -> impl IntoView {
    let line = "BF \u{2022} BSS FASHION \u{2022} Warm vintage \u{2022} curated drops \u{2022} \
                New Arrivals \u{2022} Men \u{2022} Women \u{2022} Accessories \u{2022} Sale \u{2022} ";
    view! {
        <div class="marquee">
            <div class="marquee-track">{line} {line}</div>
        </div>
    }
}

#[component]
fn Rack(
    category: Category,
    selected_product: RwSignal<Option<Product>>,
    selected_size: RwSignal<String>,
) -> impl IntoView {
    view! {
        <section class="rack">
            <div class="rack-head">
                <h2>{category.name.clone()}</h2>
                {category.description.clone().map(|copy| view! { <p class="muted">{copy}</p> })}
            </div>
            <div class="grid">
                {category
                    .products
                    .into_iter()
                    .map(|product| {
                        let tags = tags_for(&product);
                        let open = {
                            let product = product.clone();
                            move |_| {
                                selected_size.set(String::new());
                                selected_product.set(Some(product.clone()));
                            }
                        };
                        view! {
                            <article class="card" on:click=open>
                                <img src=product.image.clone() alt=product.name.clone()/>
                                <div class="card-body">
                                    <h4>{product.name.clone()}</h4>
                                    <div class="tags">
                                        {tags
                                            .into_iter()
                                            .map(|tag| view! { <span class="tag">{tag}</span> })
                                            .collect_view()}
                                    </div>
                                    <div class="price">{product.price.display()}</div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <h4>"Bulk Orders & Corporate Gifting"</h4>
            <p class="muted">
                "Planning an event, business giveaway, or group order? We offer exclusive \
                 rates and personalized service for bulk requests."
            </p>
        </footer>
    }
}
