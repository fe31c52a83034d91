//! The curriculum literal. Built once at startup and passed down by
//! reference; nothing here is mutated at runtime.

use crate::models::{Company, Curriculum, EducationItem, Experience, LinkItem, Role};

pub fn curriculum() -> Curriculum {
    Curriculum {
        experience: Experience {
            companies: vec![
                tidio(),
                casavo(),
                ebay(),
                skebby(),
                lumata(),
                vidiemme(),
            ],
        },
        education: education(),
        skills: skills(),
        links: links(),
        additional_info: additional_info(),
    }
}

fn tidio() -> Company {
    Company {
        name: "Tidio".into(),
        roles: vec![
            Role {
                name: "Head of Engineering".into(),
                description: vec![
                    "Led the engineering organization, managed a multicultural team of 4 Senior EMs, 1 Agile Coach, 32 ICs".into(),
                    "Designed and executed technical strategy and engineering roadmap aligned with business in terms of product quality and performances, security and reliability".into(),
                    "Accomplished a ~70% reduction of global defects and reduced response time to critical support requests by ~95%".into(),
                    "Reduced security issues by ~60% by creating and implementing a structured vulnerabilities management process".into(),
                    "Ensured 100% of users issues were addressed by structuring software ownership according to DDD principles".into(),
                    "Collaborated successfully with multiple departments like Product, Support and HR".into(),
                    "Reached all-time-high in engineering eNPS (8.40 out of 10); retained 100% of talents".into(),
                ],
                from: "August 2024".into(),
                to: "Present".into(),
            },
            Role {
                name: "Senior Engineering Manager".into(),
                description: vec![
                    "Spearheaded 2 strategic product areas, coached and mentored managers and 4 cross-functional teams".into(),
                    "Collaborated cross-functionally with multiple PMs, designers and UX researchers".into(),
                    "Empowered engineers through self-organization and introduction of XP and Lean best practices, boosting flow efficiency and cycle time by ~60%".into(),
                    "Reduced bugs by 70% by promoting a customer centric mindset, QA shift-left, dogfooding/shadowing".into(),
                    "Achieved the highest eNPS (8.84 out of 10) of the org, leading to 100% talent retention".into(),
                ],
                from: "October 2023".into(),
                to: "August 2024".into(),
            },
        ],
    }
}

fn casavo() -> Company {
    Company {
        name: "Casavo Management Spa".into(),
        roles: vec![Role {
            name: "Engineering Manager / Head of Engineering".into(),
            description: vec![
                "Managed 4 built-from-scratch high-performing cross-functional agile development teams (~25 engineers) in a hyper-growth remote-first scale-up context; scaled the whole tech organization by 4x".into(),
                "Established technical strategy, OKRs, KPIs and processes that empowered teams to decrease cycle time by ~30%, optimize external services costs by ~40%, reduce tech debt by ~35%, increase conversion rate by ~20%".into(),
                "Coordinated with 5 cross-functional business partners (product, design, strategy, operations, marketing)".into(),
                "Reorganized hiring, performance review and compensation using a meritocratic dual-track career ladder".into(),
                "Realized the most diverse and inclusive team of the organization; maintained 100% retention of top performers".into(),
            ],
            from: "March 2021".into(),
            to: "September 2023".into(),
        }],
    }
}

fn ebay() -> Company {
    Company {
        name: "eBay Inc".into(),
        roles: vec![
            Role {
                name: "Head of Engineering / CTO".into(),
                description: vec![
                    "Managed local and remote development teams of 15 engineers across two Italian classifieds platforms".into(),
                    "Drove agile adoption and established a culture of collaboration between tech and business which resulted in 0% employees churn rate, increase website speed by ~70%, reduce technical debt by 25%, evolve technologies/architecture, streamline processes".into(),
                    "Contributed to global strategy through monthly eBay Classifieds Group CTO and Architects roundtables".into(),
                ],
                from: "February 2020".into(),
                to: "March 2021".into(),
            },
            Role {
                name: "Software Engineering Manager".into(),
                description: vec![
                    "Guided the technical discussion during the management team’s weekly meeting,".into(),
                    "Defined short & long term technical strategy for the evolution of product and infrastructure, analyzed feasibility and provided estimations based on team’s capacity, ensuring 100% delivery on time and budget".into(),
                    "Recruited, formed and led a new technical team of 10 senior professionals, strengthened team culture and motivated engineers according to company's goals & values; 20% hands-on software & architecture".into(),
                    "Promoted and achieved cross-functional collaboration with product, data, marketing, business stakeholders".into(),
                ],
                from: "February 2018".into(),
                to: "February 2020".into(),
            },
            Role {
                name: "Senior Software Engineer".into(),
                description: vec![
                    "Designed and developed vertical classifieds automobile.it (~7M MAU), based on newest technologies and a microservices architecture in the cloud, as a member of an agile team made of 10 people".into(),
                    "Migrated the old website (mobile.de) with no downtime, seamlessly onboarded 2500+ existing car dealers and their ads, revamped SEO, setup CI pipelines, created REST API for partners integration as tech reference".into(),
                    "Awarded in 2017 for implementing a project that boosted leads to car dealers by 20%".into(),
                    "Advocated company’s culture and values, facilitated communication between product and tech".into(),
                ],
                from: "June 2014".into(),
                to: "February 2018".into(),
            },
        ],
    }
}

fn skebby() -> Company {
    Company {
        name: "Skebby Mobile Solutions srl".into(),
        roles: vec![Role {
            name: "Senior Software Engineer".into(),
            description: vec![
                "Developed a SMS platform handling millions of messages/day using Spring Boot, MySQL, ActiveMQ, Jenkins".into(),
            ],
            from: "December 2013".into(),
            to: "June 2014".into(),
        }],
    }
}

fn lumata() -> Company {
    Company {
        name: "Lumata / Buongiorno Spa".into(),
        roles: vec![Role {
            name: "Senior Software Engineer".into(),
            description: vec![
                "Contributed, as main engineer and international technical reference, to the development of the core API and web apps for mission critical, multitenant and large scale telecom services (~20 millions users)".into(),
                "Created a back-office tool that gave 100% autonomy to business stakeholders removing tech team dependency".into(),
            ],
            from: "May 2010".into(),
            to: "November 2013".into(),
        }],
    }
}

fn vidiemme() -> Company {
    Company {
        name: "Vidiemme Consulting srl".into(),
        roles: vec![Role {
            name: "Software Engineer".into(),
            description: vec![
                "Implemented a wide variety of small to medium projects using Spring. Guided a team of three engineers".into(),
            ],
            from: "May 2008".into(),
            to: "April 2010".into(),
        }],
    }
}

fn education() -> Vec<EducationItem> {
    vec![
        EducationItem {
            name: "Politecnico di Milano".into(),
            description: "M.Sc. in Computer Science".into(),
            date: "July 2007".into(),
        },
        EducationItem {
            name: "Escuela Europea de Coaching".into(),
            description: "Executive Coaching".into(),
            date: "2024 - 2025".into(),
        },
        EducationItem {
            name: "Remote-how".into(),
            description: "Academy for Managers".into(),
            date: "March 2022".into(),
        },
        EducationItem {
            name: "Certified Secure".into(),
            description: "Certified Secure yearly training".into(),
            date: "2014 – 2020".into(),
        },
        EducationItem {
            name: "eBay".into(),
            description: "Leader as Coach".into(),
            date: "April 2018".into(),
        },
    ]
}

fn skills() -> Vec<String> {
    vec![
        "People management, Engineering management, Agile methodologies, Hiring, Coaching, Technical strategy, Conflict resolution, Organizational design, Remote management, Nonviolent communication, OKR, Stakeholder management, Scaling engineering teams".into(),
        "System design, Java, Spring, Python, Redis, MySQL, Elasticsearch, RabbitMQ, Docker, TDD, DDD, CI/CD".into(),
    ]
}

fn links() -> Vec<LinkItem> {
    vec![
        LinkItem {
            title: "Wineries on the Road".into(),
            description: "Android application to explore and visit Italian wineries".into(),
            href: "https://play.google.com/store/apps/details?id=com.cantineontheroad".into(),
        },
        LinkItem {
            title: "JSONDoc".into(),
            description: "Java and Spring library to document API endpoints".into(),
            href: "http://jsondoc.org/".into(),
        },
        LinkItem {
            title: "MissPlitty".into(),
            description: "Android application to manage group expenses".into(),
            href: "https://play.google.com/store/apps/details?id=com.fubbyo".into(),
        },
        LinkItem {
            title: "Github".into(),
            description: "Personal Github page".into(),
            href: "https://github.com/fabiomaffioletti".into(),
        },
        LinkItem {
            title: "Resources for EMs".into(),
            description: "Collection of learning resources for Engineering Managers and technical leaders".into(),
            href: "https://whimsical.com/resources-for-engineering-management-2Jut7BVjoSyBXgB8fBVeHd".into(),
        },
    ]
}

fn additional_info() -> Vec<String> {
    vec![
        "Languages: Italian (native), English (fluent)".into(),
        "Avid reader. Amateur photographer and cook. Sommelier. Guitar player.".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curriculum_has_all_sections_populated() {
        let c = curriculum();
        assert_eq!(c.experience.companies.len(), 6);
        assert_eq!(c.education.len(), 5);
        assert_eq!(c.skills.len(), 2);
        assert_eq!(c.links.len(), 5);
        assert_eq!(c.additional_info.len(), 2);
    }

    #[test]
    fn test_companies_keep_display_order() {
        let c = curriculum();
        let names: Vec<&str> = c
            .experience
            .companies
            .iter()
            .map(|company| company.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Tidio",
                "Casavo Management Spa",
                "eBay Inc",
                "Skebby Mobile Solutions srl",
                "Lumata / Buongiorno Spa",
                "Vidiemme Consulting srl",
            ],
            "company order is display order"
        );
    }

    #[test]
    fn test_current_role_uses_present_sentinel() {
        let c = curriculum();
        let first_role = &c.experience.companies[0].roles[0];
        assert_eq!(first_role.to, "Present");
        assert!(!first_role.description.is_empty());
    }
}
