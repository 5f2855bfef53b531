use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    content::{Education, Experience, Portfolio, Project, SkillGroup},
    icons::Icon,
    kit::{BadgeVariant, ButtonVariant},
    motion::Motion,
    navigation::{MobileMenu, SectionId},
};

use super::{
    contact::{use_contact_form, ContactCard},
    header::Header,
    layout::{hero_style, use_active_section, use_scroll_progress, Reveal, ScrollProgress, Section, SectionRefs},
    ui::{Badge, Button, Card, CardContent, CardHeader, CardTitle, Glyph, Separator, Tabs, TabsContent, TabsList, TabsTrigger},
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

/// The whole single-page portfolio. Owns every piece of page-level state.
#[component]
pub fn HomePage(portfolio: &'static Portfolio) -> impl IntoView {
    let refs = SectionRefs::new();
    let active = use_active_section(refs);
    let page = NodeRef::<leptos::html::Div>::new();
    let progress = use_scroll_progress(page);
    let menu = RwSignal::new(MobileMenu::default());
    let (form, timers) = use_contact_form();
    let profile = &portfolio.profile;

    view! {
        <Title text=profile.name.clone() />
        <ScrollProgress progress />
        <div node_ref=page class="min-h-screen bg-background text-foreground antialiased">
            <Header brand=profile.short_name.clone() active menu />
            <main class="max-w-6xl mx-auto px-4">
                <section
                    id=SectionId::Home.as_str()
                    node_ref=refs.get(SectionId::Home)
                    class="pt-12 md:pt-20 relative overflow-hidden"
                >
                    <div style=hero_style(progress)>
                        <Hero portfolio />
                    </div>
                </section>

                <Separator />
                <Section
                    id=SectionId::About
                    title="About"
                    icon=Icon::Rocket
                    node_ref=refs.get(SectionId::About)
                >
                    <About portfolio />
                </Section>

                <Separator />
                <Section
                    id=SectionId::Experience
                    title="Experience"
                    icon=Icon::Briefcase
                    node_ref=refs.get(SectionId::Experience)
                >
                    <Timeline experiences=portfolio.experiences.as_slice() />
                </Section>

                <Separator />
                <Section
                    id=SectionId::Projects
                    title="Projects"
                    icon=Icon::Rocket
                    node_ref=refs.get(SectionId::Projects)
                >
                    <Projects projects=portfolio.projects.as_slice() />
                </Section>

                <Separator />
                <Section
                    id=SectionId::Skills
                    title="Skills"
                    icon=Icon::Cpu
                    node_ref=refs.get(SectionId::Skills)
                >
                    <Skills skills=portfolio.skills.as_slice() />
                </Section>

                <Separator />
                <Section
                    id=SectionId::Education
                    title="Education"
                    icon=Icon::GraduationCap
                    node_ref=refs.get(SectionId::Education)
                >
                    <EducationCard education=&portfolio.education />
                </Section>

                <Separator />
                <Section
                    id=SectionId::Contact
                    title="Contact"
                    icon=Icon::Mail
                    node_ref=refs.get(SectionId::Contact)
                >
                    <ContactCard profile form timers />
                </Section>

                <footer class="py-10 text-center text-xs text-muted-foreground">
                    {format!("© {BUILD_YEAR} {}. Built with Rust, Leptos & Tailwind.", profile.name)}
                </footer>
            </main>
        </div>
    }
}

#[component]
fn Hero(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    view! {
        <h1 class="text-4xl md:text-7xl font-semibold tracking-tight">{profile.name.as_str()}</h1>
        <p class="mt-3 text-base md:text-lg text-muted-foreground flex items-center gap-2">
            <Glyph icon=Icon::Briefcase class="h-5 w-5" />
            {format!("{} · {}", profile.role, profile.employer)}
        </p>
        <p class="mt-4 text-sm md:text-base text-muted-foreground leading-relaxed">
            {profile.tagline.as_str()}
        </p>

        <div class="mt-6 flex flex-wrap items-center gap-3">
            <a
                href=portfolio.resume_path.as_str()
                download=""
                aria-label="Download resume PDF"
            >
                <Button>
                    <Glyph icon=Icon::Download class="h-4 w-4 mr-2" />
                    "Download Resume"
                </Button>
            </a>
            <a href=SectionId::Projects.href() aria-label="Learn more about projects">
                <Button variant=ButtonVariant::Outline>"Learn more"</Button>
            </a>
            {profile
                .links
                .iter()
                .map(|link| {
                    view! {
                        <a
                            href=link.href.as_str()
                            target="_blank"
                            rel="noreferrer"
                            aria-label=format!("Visit {} profile", link.label)
                        >
                            <Button variant=ButtonVariant::Ghost class="gap-2">
                                <Glyph icon=link.icon class="h-4 w-4" />
                                {link.label.as_str()}
                            </Button>
                        </a>
                    }
                })
                .collect_view()}
        </div>

        <div class="mt-8 grid grid-cols-2 md:grid-cols-4 gap-3">
            {portfolio
                .highlights
                .iter()
                .map(|h| {
                    view! {
                        <Card class="hover:shadow-md transition-shadow">
                            <CardContent class="py-4">
                                <div class="text-2xl font-semibold">{h.value.as_str()}</div>
                                <div class="text-xs text-muted-foreground mt-1">
                                    {h.label.as_str()}
                                </div>
                            </CardContent>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn About(portfolio: &'static Portfolio) -> impl IntoView {
    let profile = &portfolio.profile;
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            <Card class="md:col-span-2">
                <CardContent class="pt-6 text-sm md:text-[15px] leading-7 text-muted-foreground">
                    {portfolio.about.as_str()}
                </CardContent>
            </Card>
            <Card>
                <CardContent class="pt-6 grid gap-3 text-sm">
                    <div class="flex items-center gap-2">
                        <Glyph icon=Icon::MapPin class="h-4 w-4" />
                        {profile.location.as_str()}
                    </div>
                    <a
                        class="flex items-center gap-2 hover:underline"
                        href=format!("mailto:{}", profile.email)
                    >
                        <Glyph icon=Icon::Mail class="h-4 w-4" />
                        {profile.email.as_str()}
                    </a>
                    <a
                        class="flex items-center gap-2 hover:underline"
                        href=format!("tel:{}", profile.phone)
                    >
                        <Glyph icon=Icon::Phone class="h-4 w-4" />
                        {profile.phone.as_str()}
                    </a>
                </CardContent>
            </Card>
        </div>
    }
}

#[component]
fn Timeline(experiences: &'static [Experience]) -> impl IntoView {
    view! {
        <div class="relative pl-6 md:pl-10">
            <div class="absolute left-2 md:left-4 top-0 bottom-0 w-px bg-border" />
            <div class="space-y-8">
                {experiences
                    .iter()
                    .map(|exp| {
                        view! {
                            <Reveal motion=Motion::TIMELINE_ITEM class="relative">
                                <div class="absolute -left-[9px] md:-left-[11px] top-1 h-4 w-4 rounded-full bg-gradient-to-r from-indigo-500 to-rose-500 ring-2 ring-background" />
                                <Card>
                                    <CardHeader class="pb-2">
                                        <CardTitle class="flex flex-wrap items-center gap-2 text-base md:text-lg">
                                            <span>{exp.title.as_str()}</span>
                                            <span class="text-muted-foreground">
                                                {format!("· {}", exp.company)}
                                            </span>
                                        </CardTitle>
                                        <div class="text-xs text-muted-foreground">
                                            {format!("{} · {}", exp.date, exp.location)}
                                        </div>
                                    </CardHeader>
                                    <CardContent class="pt-0">
                                        <ul class="list-disc pl-5 text-sm md:text-[15px] space-y-2 text-muted-foreground">
                                            {exp
                                                .bullets
                                                .iter()
                                                .map(|b| view! { <li>{b.as_str()}</li> })
                                                .collect_view()}
                                        </ul>
                                    </CardContent>
                                </Card>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6">
            {projects
                .iter()
                .map(|p| {
                    view! {
                        <Reveal motion=Motion::CARD>
                            <Card class="h-full hover:shadow-md transition-shadow">
                                <CardHeader>
                                    <div class="flex items-center gap-2">
                                        <Glyph icon=p.icon class="h-5 w-5" />
                                        <CardTitle class="text-base md:text-lg">
                                            {p.name.as_str()}
                                        </CardTitle>
                                    </div>
                                </CardHeader>
                                <CardContent class="grid gap-3">
                                    <p class="text-sm text-muted-foreground">
                                        {p.description.as_str()}
                                    </p>
                                    <div class="flex flex-wrap gap-2">
                                        {p
                                            .tags
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <Badge variant=BadgeVariant::Secondary>
                                                        {t.as_str()}
                                                    </Badge>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {(!p.links.is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="pt-1 flex gap-3">
                                                    {p
                                                        .links
                                                        .iter()
                                                        .map(|l| {
                                                            view! {
                                                                <a
                                                                    href=l.href.as_str()
                                                                    target="_blank"
                                                                    rel="noreferrer"
                                                                    class="inline-flex items-center gap-1 text-sm text-primary hover:underline"
                                                                >
                                                                    <Glyph icon=Icon::Link class="h-4 w-4" />
                                                                    {l.label()}
                                                                </a>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                        })}
                                </CardContent>
                            </Card>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Skills(skills: &'static [SkillGroup]) -> impl IntoView {
    let default_group = skills.first().map(|s| s.group.clone()).unwrap_or_default();
    view! {
        <Tabs default_value=default_group class="grid gap-4">
            <TabsList class="flex-wrap h-auto justify-start gap-1">
                {skills
                    .iter()
                    .map(|s| {
                        view! {
                            <TabsTrigger value=s.group.as_str() class="gap-2">
                                <Glyph icon=s.icon class="h-4 w-4" />
                                {s.group.as_str()}
                            </TabsTrigger>
                        }
                    })
                    .collect_view()}
            </TabsList>
            {skills
                .iter()
                .map(|s| {
                    view! {
                        <TabsContent value=s.group.as_str()>
                            <Card>
                                <CardHeader class="pb-2">
                                    <div class="flex items-center gap-2">
                                        <Glyph icon=s.icon class="h-5 w-5" />
                                        <CardTitle class="text-base">{s.group.as_str()}</CardTitle>
                                    </div>
                                </CardHeader>
                                <CardContent class="pt-0">
                                    <div class="flex flex-wrap gap-2">
                                        {s
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <Badge variant=BadgeVariant::Outline>
                                                        {item.as_str()}
                                                    </Badge>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </CardContent>
                            </Card>
                        </TabsContent>
                    }
                })
                .collect_view()}
        </Tabs>
    }
}

#[component]
fn EducationCard(education: &'static Education) -> impl IntoView {
    view! {
        <Card>
            <CardContent class="py-6 text-sm md:text-[15px] flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                <div>
                    <div class="font-medium">{education.degree.as_str()}</div>
                    <div class="text-muted-foreground">{education.school.as_str()}</div>
                </div>
                <div class="text-xs text-muted-foreground">{education.date.as_str()}</div>
            </CardContent>
        </Card>
    }
}
