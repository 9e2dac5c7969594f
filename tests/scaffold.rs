use std::{
    cell::RefCell,
    collections::VecDeque,
    fs,
    path::{Path, PathBuf},
};

use zt::{
    fetch::STAGING_PREFIX, prompt::Prompt, vcs::Vcs, Error, Outcome, Result, Scaffold, TemplateRef,
};

#[derive(Default)]
struct FakeGit {
    clone_error: Option<&'static str>,
    init_error: Option<&'static str>,
    init_denied: bool,
    cloned: RefCell<Vec<String>>,
    initialized: RefCell<Vec<PathBuf>>,
}

impl Vcs for FakeGit {
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<()> {
        self.cloned.borrow_mut().push(url.to_string());
        fs::create_dir_all(dest.join(".git"))?;

        if let Some(message) = self.clone_error {
            return Err(Error::CloneFailure {
                url: url.to_string(),
                message: message.to_string(),
            });
        }

        fs::write(dest.join(".git/HEAD"), "ref: refs/heads/main")?;
        fs::write(dest.join("package.json"), "{}")?;
        fs::write(dest.join("index.html"), "<div id=\"root\"></div>")?;
        Ok(())
    }

    fn init(&self, dir: &Path) -> Result<()> {
        self.initialized.borrow_mut().push(dir.to_path_buf());

        if let Some(message) = self.init_error {
            return Err(Error::RepoInitFailure(message.to_string()));
        }
        if self.init_denied {
            return Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into());
        }

        fs::create_dir(dir.join(".git"))?;
        Ok(())
    }
}

#[derive(Default)]
struct Script {
    texts: VecDeque<&'static str>,
    confirms: VecDeque<bool>,
    texts_asked: usize,
    confirms_asked: usize,
}

impl Prompt for Script {
    fn confirm(&mut self, _: &str, _: bool) -> Result<bool> {
        self.confirms_asked += 1;
        Ok(self.confirms.pop_front().expect("Unexpected confirmation"))
    }

    fn text(&mut self, _: &str, _: &str) -> Result<String> {
        self.texts_asked += 1;
        Ok(self.texts.pop_front().expect("Unexpected text prompt").to_string())
    }
}

fn scaffold(cwd: &Path, template: Option<&str>, name: Option<&str>, force: bool) -> Scaffold {
    Scaffold::builder()
        .cwd(cwd)
        .template(template.map(str::to_string))
        .project_name(name.map(str::to_string))
        .force(force)
        .build()
        .unwrap()
}

fn staging_dirs(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .starts_with(STAGING_PREFIX)
        })
        .count()
}

#[test]
fn forced_over_existing_file() {
    let cwd = tempfile::tempdir().unwrap();
    let target = cwd.path().join("demo");
    fs::write(&target, "in the way").unwrap();

    let git = FakeGit::default();
    let mut prompt = Script::default();

    let outcome = scaffold(
        cwd.path(),
        Some("travzhang/react-vite-template"),
        Some("demo"),
        true,
    )
    .run(&mut prompt, &git)
    .unwrap();

    let Outcome::Created(created) = outcome else {
        panic!("Expected the project to be created");
    };

    assert_eq!(created.target, target);
    assert_eq!(created.files, 2);
    assert!(created.git_initialized);
    assert_eq!(prompt.confirms_asked + prompt.texts_asked, 0);

    assert!(target.join("package.json").is_file());
    assert_eq!(
        git.cloned.borrow().as_slice(),
        ["https://github.com/travzhang/react-vite-template.git"]
    );
    assert_eq!(git.initialized.borrow().as_slice(), [target.clone()]);
    // only the fresh repository remains
    assert!(!target.join(".git/HEAD").exists());
    assert_eq!(staging_dirs(cwd.path()), 0);
}

#[test]
fn prompted_name_with_default_template() {
    let cwd = tempfile::tempdir().unwrap();
    let git = FakeGit::default();
    let mut prompt = Script {
        texts: ["my-app"].into(),
        ..Script::default()
    };

    let outcome = scaffold(cwd.path(), Some(""), Some(""), false)
        .run(&mut prompt, &git)
        .unwrap();

    let Outcome::Created(created) = outcome else {
        panic!("Expected the project to be created");
    };

    assert_eq!(prompt.texts_asked, 1);
    assert_eq!(prompt.confirms_asked, 0);
    assert_eq!(created.name, "my-app");
    assert_eq!(created.template, TemplateRef::default());
    assert!(cwd.path().join("my-app").join("index.html").is_file());
    assert_eq!(
        git.cloned.borrow().as_slice(),
        [TemplateRef::default().clone_url()]
    );
}

#[test]
fn failed_clone_leaves_nothing_behind() {
    let cwd = tempfile::tempdir().unwrap();
    let git = FakeGit {
        clone_error: Some("fatal: unable to access: Could not resolve host: github.com"),
        ..FakeGit::default()
    };
    let mut prompt = Script::default();

    let err = scaffold(cwd.path(), Some("acme/widget"), Some("demo"), false)
        .run(&mut prompt, &git)
        .unwrap_err();

    assert!(matches!(err, Error::CloneFailure { .. }));
    assert!(err.to_string().contains("Could not resolve host"));
    assert!(!cwd.path().join("demo").exists());
    assert_eq!(staging_dirs(cwd.path()), 0);
    assert!(git.initialized.borrow().is_empty());
}

#[test]
fn declined_overwrite_cancels() {
    let cwd = tempfile::tempdir().unwrap();
    let target = cwd.path().join("demo");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("notes.md"), "keep me").unwrap();

    let git = FakeGit::default();
    let mut prompt = Script {
        confirms: [false].into(),
        ..Script::default()
    };

    let outcome = scaffold(cwd.path(), None, Some("demo"), false)
        .run(&mut prompt, &git)
        .unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(prompt.confirms_asked, 1);
    assert_eq!(fs::read_to_string(target.join("notes.md")).unwrap(), "keep me");
    assert!(git.cloned.borrow().is_empty());
    assert!(git.initialized.borrow().is_empty());
}

#[test]
fn failed_init_still_succeeds() {
    let cwd = tempfile::tempdir().unwrap();
    let git = FakeGit {
        init_error: Some("git: command not found"),
        ..FakeGit::default()
    };
    let mut prompt = Script::default();

    let outcome = scaffold(cwd.path(), None, Some("demo"), false)
        .run(&mut prompt, &git)
        .unwrap();

    let Outcome::Created(created) = outcome else {
        panic!("Expected the project to be created");
    };
    assert!(!created.git_initialized);
    assert!(!cwd.path().join("demo/.git").exists());
    assert!(cwd.path().join("demo/package.json").is_file());
}

#[test]
fn unexpected_init_errors_are_not_downgraded() {
    let cwd = tempfile::tempdir().unwrap();
    let git = FakeGit {
        init_denied: true,
        ..FakeGit::default()
    };
    let mut prompt = Script::default();

    let err = scaffold(cwd.path(), None, Some("demo"), false)
        .run(&mut prompt, &git)
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)), "{err}");
    assert_eq!(git.initialized.borrow().len(), 1);
}

#[test]
fn invalid_reference_fails_before_prompting() {
    let cwd = tempfile::tempdir().unwrap();
    let git = FakeGit::default();
    let mut prompt = Script::default();

    let err = scaffold(cwd.path(), Some("widget"), None, false)
        .run(&mut prompt, &git)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidReferenceFormat(ref s) if s == "widget"));
    assert_eq!(prompt.texts_asked, 0);
    assert!(git.cloned.borrow().is_empty());
}
