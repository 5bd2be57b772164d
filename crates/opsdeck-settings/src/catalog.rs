//! Built-in module catalog.
//!
//! Navigation for the suite's five modules. Users can override any part of
//! a module, or add new ones, under `modules` in the settings file.

use std::collections::BTreeMap;

use opsdeck_core::{NavItem, NavSection, PhaseKey, SectionKey, WorkflowPhase};

use crate::types::{AccentColor, ModuleConfig, QuickLink, WorkflowStep};

/// Every built-in module keyed by module key.
pub fn builtin_modules() -> BTreeMap<String, ModuleConfig> {
    [
        ("analytics", analytics()),
        ("crm", crm()),
        ("hr", hr()),
        ("accounting", accounting()),
        ("sales", sales()),
    ]
    .into_iter()
    .map(|(key, module)| (key.to_string(), module))
    .collect()
}

fn link(name: &str, href: &str, icon: &str, color: AccentColor) -> QuickLink {
    QuickLink {
        name: name.to_string(),
        href: href.to_string(),
        icon: icon.to_string(),
        color,
        description: None,
    }
}

fn step(title: &str, description: &str) -> WorkflowStep {
    WorkflowStep {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn overview(base_route: &str, description: &str) -> NavSection {
    NavSection::new("overview", "Overview")
        .with_description(description)
        .with_icon("layout-dashboard")
        .item(NavItem::new("Dashboard", base_route))
}

fn analytics() -> ModuleConfig {
    ModuleConfig {
        title: "Analytics".to_string(),
        sidebar_title: "Analytics Hub".to_string(),
        base_route: "/analytics".to_string(),
        sections: vec![
            overview("/analytics", "Key metrics at a glance"),
            NavSection::new("sources", "Data Sources")
                .with_description("Connect and import data")
                .with_icon("database")
                .item(NavItem::new("Connections", "/analytics/sources"))
                .item(NavItem::new("Imports", "/analytics/sources/imports").with_description("Scheduled and manual uploads")),
            NavSection::new("dashboards", "Dashboards")
                .with_description("Build and share views")
                .with_icon("bar-chart")
                .item(NavItem::new("Dashboards", "/analytics/dashboards"))
                .item(NavItem::new("Reports", "/analytics/reports")),
            NavSection::new("insights", "Insights")
                .with_description("Trends and forecasts")
                .with_icon("trending-up")
                .item(NavItem::new("Insights", "/analytics/insights"))
                .item(NavItem::new("Forecasts", "/analytics/forecasts")),
        ],
        workflow_phases: vec![
            WorkflowPhase::new("monitor", "Monitor"),
            WorkflowPhase::new("connect", "Connect"),
            WorkflowPhase::new("visualize", "Visualize"),
            WorkflowPhase::new("act", "Act"),
        ],
        phase_map: None,
        quick_links: vec![
            link("New Dashboard", "/analytics/dashboards/new", "plus", AccentColor::Blue),
            link("Import Data", "/analytics/sources/imports", "upload", AccentColor::Green),
            link("Forecasts", "/analytics/forecasts", "trending-up", AccentColor::Purple),
        ],
        workflow_steps: vec![
            step("Connect sources", "Link databases, spreadsheets and SaaS tools"),
            step("Build dashboards", "Combine charts and tables into views"),
            step("Share insights", "Schedule reports for stakeholders"),
        ],
    }
}

fn crm() -> ModuleConfig {
    ModuleConfig {
        title: "Customer Relationships".to_string(),
        sidebar_title: "CRM".to_string(),
        base_route: "/crm".to_string(),
        sections: vec![
            overview("/crm", "Pipeline health and activity"),
            NavSection::new("contacts", "Contacts")
                .with_description("People and organizations")
                .with_icon("users")
                .item(NavItem::new("Contacts", "/crm/contacts"))
                .item(NavItem::new("Companies", "/crm/companies")),
            NavSection::new("pipeline", "Pipeline")
                .with_description("Deals in progress")
                .with_icon("git-branch")
                .item(NavItem::new("Deals", "/crm/deals"))
                .item(NavItem::new("Board", "/crm/pipeline").with_description("Stage-by-stage view")),
            NavSection::new("engagement", "Engagement")
                .with_description("Touchpoints and campaigns")
                .with_icon("mail")
                .item(NavItem::new("Activities", "/crm/activities"))
                .item(NavItem::new("Campaigns", "/crm/campaigns")),
        ],
        workflow_phases: vec![
            WorkflowPhase::new("review", "Review"),
            WorkflowPhase::new("capture", "Capture"),
            WorkflowPhase::new("qualify", "Qualify"),
            WorkflowPhase::new("nurture", "Nurture"),
        ],
        phase_map: None,
        quick_links: vec![
            link("Add Contact", "/crm/contacts/new", "user-plus", AccentColor::Blue),
            link("New Deal", "/crm/deals/new", "briefcase", AccentColor::Green),
            link("Log Activity", "/crm/activities/new", "phone", AccentColor::Orange),
            link("Campaigns", "/crm/campaigns", "mail", AccentColor::Indigo),
        ],
        workflow_steps: vec![
            step("Capture leads", "Record contacts from forms and imports"),
            step("Qualify", "Score and assign to owners"),
            step("Close", "Move deals through pipeline stages"),
        ],
    }
}

fn hr() -> ModuleConfig {
    let phase_map = [
        ("overview", "setup"),
        ("employees", "setup"),
        ("payroll", "process"),
        ("leave", "process"),
        ("reports", "review"),
    ]
    .into_iter()
    .map(|(section, phase)| (SectionKey::from(section), PhaseKey::from(phase)))
    .collect();

    ModuleConfig {
        title: "Human Resources".to_string(),
        sidebar_title: "HR & Payroll".to_string(),
        base_route: "/hr".to_string(),
        sections: vec![
            overview("/hr", "Headcount and upcoming events"),
            NavSection::new("employees", "Employees")
                .with_description("Records and onboarding")
                .with_icon("users")
                .item(NavItem::new("Directory", "/hr/employees"))
                .item(NavItem::new("Onboarding", "/hr/employees/onboarding")),
            NavSection::new("payroll", "Payroll")
                .with_description("Runs, payslips and deductions")
                .with_icon("wallet")
                .item(NavItem::new("Payroll Runs", "/hr/payroll"))
                .item(NavItem::new("Payslips", "/hr/payroll/payslips"))
                .item(NavItem::new("Deductions", "/hr/payroll/deductions").with_description("Statutory and voluntary")),
            NavSection::new("leave", "Leave")
                .with_description("Requests and balances")
                .with_icon("calendar")
                .item(NavItem::new("Requests", "/hr/leave"))
                .item(NavItem::new("Calendar", "/hr/leave/calendar")),
            NavSection::new("reports", "Reports")
                .with_description("Compliance and cost reports")
                .with_icon("file-text")
                .item(NavItem::new("Reports", "/hr/reports")),
        ],
        workflow_phases: vec![
            WorkflowPhase::new("setup", "Setup").with_description("Employees and pay structures"),
            WorkflowPhase::new("process", "Process").with_description("Run payroll and approve leave"),
            WorkflowPhase::new("review", "Review").with_description("Reconcile and report"),
        ],
        phase_map: Some(phase_map),
        quick_links: vec![
            link("Add Employee", "/hr/employees/new", "user-plus", AccentColor::Blue),
            link("Run Payroll", "/hr/payroll/new", "play", AccentColor::Green),
            link("Approve Leave", "/hr/leave", "check", AccentColor::Amber),
            link("Payslips", "/hr/payroll/payslips", "file-text", AccentColor::Purple),
        ],
        workflow_steps: vec![
            step("Set up employees", "Create records with pay grades and tax details"),
            step("Run payroll", "Calculate gross-to-net for the period"),
            step("Issue payslips", "Publish payslips to employees"),
            step("Report", "File statutory returns"),
        ],
    }
}

fn accounting() -> ModuleConfig {
    ModuleConfig {
        title: "Accounting & Tax".to_string(),
        sidebar_title: "Accounting".to_string(),
        base_route: "/accounting".to_string(),
        sections: vec![
            overview("/accounting", "Cash position and open items"),
            NavSection::new("ledger", "Ledger")
                .with_description("Chart of accounts and journals")
                .with_icon("book")
                .item(NavItem::new("General Ledger", "/accounting/ledger"))
                .item(NavItem::new("Journal Entries", "/accounting/journal")),
            NavSection::new("invoices", "Receivables & Payables")
                .with_description("Invoices and bills")
                .with_icon("receipt")
                .item(NavItem::new("Invoices", "/accounting/invoices"))
                .item(NavItem::new("Bills", "/accounting/bills")),
            NavSection::new("tax", "Tax")
                .with_description("Rates and returns")
                .with_icon("landmark")
                .item(NavItem::new("Tax Rates", "/accounting/tax"))
                .item(NavItem::new("Returns", "/accounting/tax/returns")),
        ],
        workflow_phases: vec![
            WorkflowPhase::new("setup", "Setup"),
            WorkflowPhase::new("record", "Record"),
            WorkflowPhase::new("reconcile", "Reconcile"),
            WorkflowPhase::new("file", "File"),
        ],
        phase_map: None,
        quick_links: vec![
            link("New Invoice", "/accounting/invoices/new", "file-plus", AccentColor::Blue),
            link("Record Bill", "/accounting/bills/new", "receipt", AccentColor::Red),
            link("Journal Entry", "/accounting/journal/new", "edit", AccentColor::Teal),
            link("Tax Return", "/accounting/tax/returns", "landmark", AccentColor::Amber),
        ],
        workflow_steps: vec![
            step("Configure accounts", "Set up the chart of accounts and tax rates"),
            step("Record transactions", "Post invoices, bills and journals"),
            step("Reconcile", "Match bank lines to ledger entries"),
            step("File returns", "Prepare and submit tax returns"),
        ],
    }
}

fn sales() -> ModuleConfig {
    ModuleConfig {
        title: "Sales Configuration".to_string(),
        sidebar_title: "Sales".to_string(),
        base_route: "/sales".to_string(),
        sections: vec![
            overview("/sales", "Bookings and quote conversion"),
            NavSection::new("catalog", "Catalog")
                .with_description("Products and price books")
                .with_icon("package")
                .item(NavItem::new("Products", "/sales/products"))
                .item(NavItem::new("Pricing", "/sales/pricing")),
            NavSection::new("configure", "Configure & Quote")
                .with_description("Build configurations and quotes")
                .with_icon("sliders")
                .item(NavItem::new("Configurator", "/sales/configurator"))
                .item(NavItem::new("Quotes", "/sales/quotes")),
            NavSection::new("orders", "Orders")
                .with_description("Fulfilment tracking")
                .with_icon("truck")
                .item(NavItem::new("Orders", "/sales/orders")),
        ],
        workflow_phases: vec![
            WorkflowPhase::new("setup", "Setup"),
            WorkflowPhase::new("catalog", "Catalog"),
            WorkflowPhase::new("quote", "Quote"),
            WorkflowPhase::new("fulfil", "Fulfil"),
        ],
        phase_map: None,
        quick_links: vec![
            link("New Quote", "/sales/quotes/new", "file-plus", AccentColor::Blue),
            link("Configurator", "/sales/configurator", "sliders", AccentColor::Purple),
            link("Orders", "/sales/orders", "truck", AccentColor::Green),
        ],
        workflow_steps: vec![
            step("Define catalog", "Products, options and price books"),
            step("Configure", "Assemble valid product configurations"),
            step("Quote", "Generate and send quotes"),
            step("Fulfil", "Convert accepted quotes to orders"),
        ],
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_all_modules() {
        let modules = builtin_modules();
        let keys: Vec<_> = modules.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["accounting", "analytics", "crm", "hr", "sales"]);
    }

    #[test]
    fn catalog_modules_validate() {
        for (key, module) in builtin_modules() {
            assert!(module.validate().is_empty(), "{key}: {:?}", module.validate());
        }
    }

    #[test]
    fn every_module_starts_with_overview_at_base_route() {
        for (key, module) in builtin_modules() {
            let first = &module.sections[0];
            assert_eq!(first.key, "overview", "{key}");
            assert_eq!(first.items[0].href, module.base_route, "{key}");
        }
    }

    #[test]
    fn hr_uses_explicit_phase_map() {
        let modules = builtin_modules();
        let hr = &modules["hr"];
        let map = hr.phase_map.as_ref().unwrap();
        assert_eq!(map.len(), hr.sections.len());
        assert_eq!(map.get("payroll").map(PhaseKey::as_str), Some("process"));
    }
}
