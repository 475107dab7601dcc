use cost_tool::{
    BudgetAllocation, CostCategory, EmployeeMaster, EmployeeRoster, InternalWorker, ProfitSummary,
    ProjectData, build_report, load_project_from_json, load_roster_from_json,
    parse_remote_workers, save_project_to_json, save_roster_to_json, write_report_csv,
};
use std::fs;
use std::io::{self, Write};

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show project record counts\n  summary                            Recompute and show the profit summary\n  compare                            Show budget-vs-actual table\n  info name <text...>                Set project name\n  info client <text...>              Set client name\n  info estimate <amount>             Set original estimate\n  info contract <amount>             Set contract amount\n  info personnel <count>             Set total personnel\n  info hours <hours>                 Set estimated man-hours\n  mat add <category> <name> <qty> <unit_price>\n                                     Add an electrical material line\n  mat del <id>                       Delete a material line\n  out add <vendor> <amount> [desc...] Add an outsourcing line\n  out del <id>                       Delete an outsourcing line\n  cons add <name> <amount>           Add a consumable line\n  cons del <id>                      Delete a consumable line\n  travel <accommodation> <meal> <transport>\n                                     Set travel expenses\n  delivery <shipping> <packaging>    Set delivery costs\n  worker int <name> <salary> <hours> [category]\n                                     Add an internal worker\n  worker ext <name> <rate> <days> [category]\n                                     Add an external worker\n  worker del <id>                    Delete a worker (either list)\n  budget show                        Show budget allocation\n  budget <field> <amount>            Set one budget bucket\n  rates <overhead%> <warranty%> <margin%>\n                                     Set overhead and margin rates\n  emp list                           List roster employees\n  emp add <name> <salary>            Add a roster employee\n  emp del <id>                       Remove a roster employee\n  emp hire <id> <hours>              Add an internal worker from the roster\n  save <path>                        Save project JSON\n  load <path>                        Load project JSON (any known shape)\n  rsave <path>                       Save roster JSON\n  rload <path>                       Load roster JSON\n  import <path>                      Import external workers from delimited text\n  report <path>                      Export the CSV report\n  reset                              Reset the project\n  quit|exit                          Exit"
    );
}

fn print_counts(project: &ProjectData) {
    println!("Project            : {}", project.project_info.project_name);
    println!("Client             : {}", project.project_info.client_name);
    println!(
        "Contract amount    : {}",
        project.project_info.contract_amount
    );
    println!(
        "Materials          : {}",
        project.electrical_materials.len()
    );
    println!("Outsourcing lines  : {}", project.outsourcing_costs.len());
    println!("Consumable lines   : {}", project.consumable_costs.len());
    println!(
        "Internal workers   : {}",
        project.labor.internal_workers.len()
    );
    println!(
        "External workers   : {}",
        project.labor.external_workers.len()
    );
}

fn print_summary(project: &ProjectData) {
    let summary = ProfitSummary::compute(project);
    println!("Revenue            : {:.0}", summary.total_revenue);
    println!("Labor cost         : {:.0}", summary.labor_cost_total);
    println!("Direct subtotal    : {:.0}", summary.direct_cost_subtotal);
    println!("Overhead           : {:.0}", summary.overhead_cost);
    println!("Warranty reserve   : {:.0}", summary.warranty_reserve_cost);
    println!("Indirect subtotal  : {:.0}", summary.indirect_cost_subtotal);
    println!("Total cost         : {:.0}", summary.total_cost);
    println!("Profit             : {:.0}", summary.profit);
    println!("Profit rate        : {:.1}%", summary.profit_rate);
    println!("Target margin      : {:.1}%", summary.target_margin);
    println!("Margin difference  : {:.1}%", summary.margin_difference);
    println!("Budget total       : {:.0}", summary.budget_total);
    println!("Unallocated        : {:.0}", summary.unallocated);
    println!("({})", summary.to_cli_summary());
}

fn print_comparisons(project: &ProjectData) {
    let summary = ProfitSummary::compute(project);
    println!(
        "{:<22} {:>14} {:>14} {:>14} {:>7}",
        "Item", "Budget", "Actual", "Difference", "Status"
    );
    for row in &summary.cost_comparisons {
        println!(
            "{:<22} {:>14.0} {:>14.0} {:>14.0} {:>7}",
            row.label,
            row.budget,
            row.actual,
            row.difference,
            row.status.as_str()
        );
    }
}

fn print_budget(budget: &BudgetAllocation) {
    let mut budget = budget.clone();
    for name in BudgetAllocation::FIELD_NAMES {
        if let Some(value) = budget.field_mut(name) {
            println!("{name:<20} {:.0}", *value);
        }
    }
    println!("{:<20} {:.0}", "total", budget.total());
}

fn parse_category(s: Option<&str>) -> CostCategory {
    s.and_then(CostCategory::from_str).unwrap_or_default()
}

fn main() {
    let mut project = ProjectData::new();
    let mut roster = EmployeeRoster::default();

    println!("Cost Tool (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => print_counts(&project),
            "summary" => print_summary(&project),
            "compare" => print_comparisons(&project),
            "reset" => {
                project.reset();
                println!("Project reset.");
            }
            "info" => {
                let field = parts.next();
                let rest: Vec<&str> = parts.collect();
                match field {
                    Some("name") => {
                        project.project_info.project_name = rest.join(" ");
                        println!("Project name set.");
                    }
                    Some("client") => {
                        project.project_info.client_name = rest.join(" ");
                        println!("Client name set.");
                    }
                    Some(field @ ("estimate" | "contract" | "personnel" | "hours")) => {
                        let value: f64 = match rest.first().map(|s| s.parse()) {
                            Some(Ok(v)) => v,
                            _ => {
                                println!("Invalid amount");
                                continue;
                            }
                        };
                        match field {
                            "estimate" => project.project_info.original_estimate = value,
                            "contract" => project.project_info.contract_amount = value,
                            "personnel" => project.project_info.total_personnel = value,
                            _ => project.project_info.estimated_man_hours = value,
                        }
                        println!("{field} set.");
                    }
                    _ => println!("Usage: info <name|client|estimate|contract|personnel|hours> ..."),
                }
            }
            "mat" => match parts.next() {
                Some("add") => {
                    let category = parts.next();
                    let name = parts.next();
                    let qty = parts.next().and_then(|s| s.parse::<f64>().ok());
                    let unit_price = parts.next().and_then(|s| s.parse::<f64>().ok());
                    match (category, name, qty, unit_price) {
                        (Some(category), Some(name), Some(qty), Some(unit_price)) => {
                            let item = project.add_material();
                            item.category = category.to_string();
                            item.item_name = name.to_string();
                            item.quantity = qty;
                            item.unit_price = unit_price;
                            println!("Added material {}", item.id);
                        }
                        _ => println!("Usage: mat add <category> <name> <qty> <unit_price>"),
                    }
                }
                Some("del") => match parts.next() {
                    Some(id) if project.remove_material(id) => println!("Deleted {id}."),
                    Some(id) => println!("Material {id} not found."),
                    None => println!("Usage: mat del <id>"),
                },
                _ => println!("Usage: mat <add|del> ..."),
            },
            "out" => match parts.next() {
                Some("add") => {
                    let vendor = parts.next();
                    let amount = parts.next().and_then(|s| s.parse::<f64>().ok());
                    let description: Vec<&str> = parts.collect();
                    match (vendor, amount) {
                        (Some(vendor), Some(amount)) => {
                            let item = project.add_outsourcing();
                            item.vendor = vendor.to_string();
                            item.amount = amount;
                            item.description = description.join(" ");
                            println!("Added outsourcing {}", item.id);
                        }
                        _ => println!("Usage: out add <vendor> <amount> [desc...]"),
                    }
                }
                Some("del") => match parts.next() {
                    Some(id) if project.remove_outsourcing(id) => println!("Deleted {id}."),
                    Some(id) => println!("Outsourcing {id} not found."),
                    None => println!("Usage: out del <id>"),
                },
                _ => println!("Usage: out <add|del> ..."),
            },
            "cons" => match parts.next() {
                Some("add") => {
                    let name = parts.next();
                    let amount = parts.next().and_then(|s| s.parse::<f64>().ok());
                    match (name, amount) {
                        (Some(name), Some(amount)) => {
                            let item = project.add_consumable();
                            item.item_name = name.to_string();
                            item.amount = amount;
                            println!("Added consumable {}", item.id);
                        }
                        _ => println!("Usage: cons add <name> <amount>"),
                    }
                }
                Some("del") => match parts.next() {
                    Some(id) if project.remove_consumable(id) => println!("Deleted {id}."),
                    Some(id) => println!("Consumable {id} not found."),
                    None => println!("Usage: cons del <id>"),
                },
                _ => println!("Usage: cons <add|del> ..."),
            },
            "travel" => {
                let values: Vec<f64> = parts.filter_map(|s| s.parse().ok()).collect();
                match values.as_slice() {
                    [accommodation, meal, transport] => {
                        project.travel_expense.accommodation_cost = *accommodation;
                        project.travel_expense.meal_cost = *meal;
                        project.travel_expense.transport_cost = *transport;
                        println!("Travel expenses set.");
                    }
                    _ => println!("Usage: travel <accommodation> <meal> <transport>"),
                }
            }
            "delivery" => {
                let values: Vec<f64> = parts.filter_map(|s| s.parse().ok()).collect();
                match values.as_slice() {
                    [shipping, packaging] => {
                        project.delivery_cost.shipping_cost = *shipping;
                        project.delivery_cost.packaging_cost = *packaging;
                        println!("Delivery costs set.");
                    }
                    _ => println!("Usage: delivery <shipping> <packaging>"),
                }
            }
            "worker" => match parts.next() {
                Some("int") => {
                    let name = parts.next();
                    let salary = parts.next().and_then(|s| s.parse::<f64>().ok());
                    let hours = parts.next().and_then(|s| s.parse::<f64>().ok());
                    let category = parse_category(parts.next());
                    match (name, salary, hours) {
                        (Some(name), Some(salary), Some(hours)) => {
                            let worker = project.labor.add_internal();
                            worker.person_name = name.to_string();
                            worker.monthly_salary = salary;
                            worker.project_hours = hours;
                            worker.cost_category = category;
                            println!("Added internal worker {}", worker.id);
                        }
                        _ => println!("Usage: worker int <name> <salary> <hours> [category]"),
                    }
                }
                Some("ext") => {
                    let name = parts.next();
                    let rate = parts.next().and_then(|s| s.parse::<f64>().ok());
                    let days = parts.next().and_then(|s| s.parse::<f64>().ok());
                    let category = parse_category(parts.next());
                    match (name, rate, days) {
                        (Some(name), Some(rate), Some(days)) => {
                            let worker = project.labor.add_external();
                            worker.person_name = name.to_string();
                            worker.daily_rate = rate;
                            worker.total_man_days = days;
                            worker.cost_category = category;
                            println!("Added external worker {}", worker.id);
                        }
                        _ => println!("Usage: worker ext <name> <rate> <days> [category]"),
                    }
                }
                Some("del") => match parts.next() {
                    Some(id)
                        if project.labor.remove_internal(id)
                            || project.labor.remove_external(id) =>
                    {
                        println!("Deleted {id}.")
                    }
                    Some(id) => println!("Worker {id} not found."),
                    None => println!("Usage: worker del <id>"),
                },
                _ => println!("Usage: worker <int|ext|del> ..."),
            },
            "budget" => match parts.next() {
                Some("show") => print_budget(&project.budget_allocation),
                Some(field) => {
                    let value = parts.next().and_then(|s| s.parse::<f64>().ok());
                    match (project.budget_allocation.field_mut(field), value) {
                        (Some(slot), Some(value)) => {
                            *slot = value;
                            println!("{field} set.");
                        }
                        (None, _) => println!(
                            "Unknown field (expected one of: {})",
                            BudgetAllocation::FIELD_NAMES.join(", ")
                        ),
                        _ => println!("Usage: budget <field> <amount>"),
                    }
                }
                None => println!("Usage: budget <show|field> ..."),
            },
            "rates" => {
                let values: Vec<f64> = parts.filter_map(|s| s.parse().ok()).collect();
                match values.as_slice() {
                    [overhead, warranty, margin] => {
                        project.overhead_and_margin.overhead_rate = *overhead;
                        project.overhead_and_margin.warranty_reserve_rate = *warranty;
                        project.overhead_and_margin.margin_rate = *margin;
                        println!("Rates set.");
                    }
                    _ => println!("Usage: rates <overhead%> <warranty%> <margin%>"),
                }
            }
            "emp" => match parts.next() {
                Some("list") => {
                    for emp in &roster.employees {
                        println!(
                            "{:<24} {:<16} salary={:.0} days={} overhead={}% hours={}",
                            emp.id,
                            emp.person_name,
                            emp.monthly_salary,
                            emp.working_days_per_month,
                            emp.overhead_rate,
                            emp.hours_per_day
                        );
                    }
                }
                Some("add") => {
                    let name = parts.next();
                    let salary = parts.next().and_then(|s| s.parse::<f64>().ok());
                    match (name, salary) {
                        (Some(name), Some(salary)) => {
                            roster = roster.add(EmployeeMaster {
                                person_name: name.to_string(),
                                monthly_salary: salary,
                                ..EmployeeMaster::default()
                            });
                            println!("Added employee.");
                        }
                        _ => println!("Usage: emp add <name> <salary>"),
                    }
                }
                Some("del") => match parts.next() {
                    Some(id) => {
                        roster = roster.remove(id);
                        println!("Removed {id} (if present).");
                    }
                    None => println!("Usage: emp del <id>"),
                },
                Some("hire") => {
                    let id = parts.next();
                    let hours = parts.next().and_then(|s| s.parse::<f64>().ok());
                    match (id, hours) {
                        (Some(id), Some(hours)) => match roster.find(id) {
                            Some(employee) => {
                                let mut worker = InternalWorker::from_employee(employee);
                                worker.project_hours = hours;
                                let worker_id = worker.id.clone();
                                project.labor.internal_workers.push(worker);
                                println!("Hired {worker_id}.");
                            }
                            None => println!("Employee {id} not found."),
                        },
                        _ => println!("Usage: emp hire <id> <hours>"),
                    }
                }
                _ => println!("Usage: emp <list|add|del|hire> ..."),
            },
            "save" => match parts.next() {
                Some(path) => match save_project_to_json(&project, path) {
                    Ok(()) => println!("Saved to {path}."),
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: save <path>"),
            },
            "load" => match parts.next() {
                Some(path) => match load_project_from_json(path) {
                    Ok(loaded) => {
                        project = loaded;
                        println!("Loaded from {path}.");
                        print_counts(&project);
                    }
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: load <path>"),
            },
            "rsave" => match parts.next() {
                Some(path) => match save_roster_to_json(&roster, path) {
                    Ok(()) => println!("Roster saved to {path}."),
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: rsave <path>"),
            },
            "rload" => match parts.next() {
                Some(path) => match load_roster_from_json(path) {
                    Ok(loaded) => {
                        roster = loaded;
                        println!("Roster loaded ({} employees).", roster.employees.len());
                    }
                    Err(e) => println!("Error: {}", e),
                },
                None => println!("Usage: rload <path>"),
            },
            "import" => match parts.next() {
                Some(path) => match fs::read_to_string(path) {
                    Ok(text) => match parse_remote_workers(&text) {
                        Ok(workers) => {
                            let count = workers.len();
                            project
                                .labor
                                .replace_external(workers, Some(path.to_string()));
                            println!("Imported {count} workers from {path}.");
                        }
                        Err(e) => println!("Import error: {}", e),
                    },
                    Err(e) => println!("Error reading {path}: {}", e),
                },
                None => println!("Usage: import <path>"),
            },
            "report" => match parts.next() {
                Some(path) => {
                    let summary = ProfitSummary::compute(&project);
                    let rows = build_report(&project, &summary);
                    match write_report_csv(&rows, path) {
                        Ok(()) => println!("Report written to {path}."),
                        Err(e) => println!("Error: {}", e),
                    }
                }
                None => println!("Usage: report <path>"),
            },
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }
}
