use crate::content::{Project, TechTag};

use super::{filter::TechFilter, pagination::Pagination};

/// The projects section's browsing state: the fetched list, the active
/// filters and the pager over the filtered list.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    filter: TechFilter,
    pagination: Pagination,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>, page_size: usize) -> Self {
        let mut pagination = Pagination::new(page_size);
        pagination.set_total(projects.len());
        Self {
            projects,
            filter: TechFilter::new(),
            pagination,
        }
    }

    pub fn filter(&self) -> &TechFilter {
        &self.filter
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn total_projects(&self) -> usize {
        self.projects.len()
    }

    pub fn filtered(&self) -> Vec<&Project> {
        self.filter.apply(&self.projects)
    }

    pub fn visible(&self) -> Vec<Project> {
        let filtered = self.filtered();
        self.pagination
            .page_slice(&filtered)
            .iter()
            .map(|p| (*p).clone())
            .collect()
    }

    pub fn set_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        self.refresh_total();
    }

    /// Any filter change starts over from the first page.
    pub fn toggle_tech(&mut self, tag: TechTag) {
        self.filter.toggle(tag);
        self.refresh_total();
        self.pagination.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear_all();
        self.refresh_total();
        self.pagination.reset();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size != self.pagination.page_size() {
            self.pagination.set_page_size(page_size);
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to_page(page);
    }

    pub fn next_page(&mut self) {
        self.pagination.next_page();
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev_page();
    }

    fn refresh_total(&mut self) {
        let count = self.filtered().len();
        self.pagination.set_total(count);
    }
}
