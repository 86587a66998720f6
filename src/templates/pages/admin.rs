// src/templates/pages/admin.rs

use crate::domain::accounts::{AccountStanding, User};
use crate::domain::filters::{FilterState, SortKey, SortOrder};
use crate::domain::language::Language;
use crate::domain::property::{Catalog, ListingType, Property, PropertyStatus};
use crate::templates::components::price_text;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct AdminVm<'a> {
    pub lang: Language,
    pub state: &'a FilterState,
    pub catalog: &'a Catalog,
    pub properties: &'a [&'a Property],
    pub users: &'a [(User, AccountStanding)],
}

pub fn admin_page(vm: &AdminVm) -> Markup {
    desktop_layout(
        "Admin Dashboard",
        vm.lang,
        html! {
            main class="container" {
                h1 { "Admin Dashboard" }

                div class="card" {
                    h3 { "Properties" }
                    (property_filter_bar(vm))
                    (property_table(vm))
                }

                div class="card" {
                    h3 { "Users" }
                    (user_table(vm))
                }
            }
        },
    )
}

fn property_filter_bar(vm: &AdminVm) -> Markup {
    let state = vm.state;
    html! {
        form class="filter-bar" method="get" action="/admin" {
            input type="hidden" name="lang" value=(vm.lang.code());
            input type="text" name="q" placeholder="Search..." value=(state.search);

            select name="status" {
                option value="" { "All Statuses" }
                @for status in &PropertyStatus::ALL {
                    option value=(status.as_str()) selected[state.status == Some(*status)] {
                        (status.label())
                    }
                }
            }

            select name="listing_type" {
                option value="" { "Sale & Rent" }
                option value="sale" selected[state.listing_type == Some(ListingType::Sale)] { "For Sale" }
                option value="rent" selected[state.listing_type == Some(ListingType::Rent)] { "For Rent" }
            }

            select name="sort" {
                option value=(SortKey::CreatedAt.as_str())
                    selected[state.sort_by == SortKey::CreatedAt] { "Newest" }
                option value=(SortKey::Title.as_str())
                    selected[state.sort_by == SortKey::Title] { "Title" }
                option value=(SortKey::Price.as_str())
                    selected[state.sort_by == SortKey::Price] { "Price" }
                option value=(SortKey::Views.as_str())
                    selected[state.sort_by == SortKey::Views] { "Views" }
            }
            select name="order" {
                option value=(SortOrder::Desc.as_str())
                    selected[state.sort_order == SortOrder::Desc] { "Descending" }
                option value=(SortOrder::Asc.as_str())
                    selected[state.sort_order == SortOrder::Asc] { "Ascending" }
            }

            button type="submit" { "Apply" }
        }
    }
}

fn property_table(vm: &AdminVm) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "ID" }
                    th { "Title" }
                    th { "City" }
                    th { "Listing" }
                    th { "Price" }
                    th { "Views" }
                    th { "Created" }
                    th { "Status" }
                    th { "Actions" }
                }
            }
            tbody {
                @for property in vm.properties {
                    tr {
                        td { (property.id) }
                        td {
                            a href=(format!("/property/{}?lang={}", property.id, vm.lang.code())) {
                                (property.title_in(vm.lang))
                            }
                        }
                        td {
                            (property.city_id
                                .and_then(|id| vm.catalog.city(id))
                                .map(|c| c.name.in_lang(vm.lang))
                                .unwrap_or("—"))
                        }
                        td { (property.listing_type.label()) }
                        td { (price_text(property)) }
                        td { (property.views_count) }
                        td { (property.created_at.format("%Y-%m-%d")) }
                        td {
                            form action=(format!("/admin/properties/{}/status", property.id))
                                method="post" class="inline-form" {
                                select name="status" {
                                    @for status in &PropertyStatus::ALL {
                                        option value=(status.as_str())
                                            selected[*status == property.status] {
                                            (status.label())
                                        }
                                    }
                                }
                                button type="submit" { "Set" }
                            }
                        }
                        td {
                            form action=(format!("/admin/properties/{}/delete", property.id))
                                method="post" class="inline-form"
                                onsubmit="return confirm('Delete this listing?');" {
                                button type="submit" { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn user_table(vm: &AdminVm) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "ID" }
                    th { "Email" }
                    th { "Name" }
                    th { "Role" }
                    th { "Standing" }
                    th { "Actions" }
                }
            }
            tbody {
                @for (user, standing) in vm.users {
                    tr {
                        td { (user.id) }
                        td { (user.email) }
                        td { (user.display_name) }
                        td { (user.role.label()) }
                        td {
                            span class=(standing_class(standing)) { (standing.label()) }
                            @match standing {
                                AccountStanding::Suspended { until: Some(until) } => {
                                    " until " (until.format("%Y-%m-%d"))
                                }
                                AccountStanding::TrialActive { ends_at } => {
                                    " ends " (ends_at.format("%Y-%m-%d"))
                                }
                                _ => {}
                            }
                        }
                        td {
                            @if standing.is_suspended() {
                                form action=(format!("/admin/users/{}/unsuspend", user.id))
                                    method="post" class="inline-form" {
                                    button type="submit" { "Unsuspend" }
                                }
                            } @else {
                                form action=(format!("/admin/users/{}/suspend", user.id))
                                    method="post" class="inline-form" {
                                    input type="number" name="days" min="1" placeholder="days";
                                    button type="submit" { "Suspend" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn standing_class(standing: &AccountStanding) -> &'static str {
    match standing {
        AccountStanding::Suspended { .. } => "standing standing-suspended",
        AccountStanding::TrialActive { .. } => "standing standing-trial",
        AccountStanding::TrialExpired => "standing standing-expired",
        AccountStanding::Active => "standing standing-active",
    }
}
